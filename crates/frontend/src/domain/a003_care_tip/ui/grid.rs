use crate::shared::components::card_animated::{stagger_delay_ms, Animated, Entrance};
use crate::shared::icons::icon;
use contracts::domain::a003_care_tip::{CARE_TIPS, CARE_TIPS_HEADING};
use leptos::prelude::*;

#[component]
pub fn CareTipGrid() -> impl IntoView {
    view! {
        <div class="care-tips">
            <h3 class="care-tips__heading">{CARE_TIPS_HEADING}</h3>
            <div class="content-grid content-grid--3">
                {CARE_TIPS
                    .iter()
                    .enumerate()
                    .map(|(index, tip)| {
                        view! {
                            <Animated
                                entrance=Entrance::Rise
                                delay_ms=stagger_delay_ms(index)
                                class="care-tip"
                            >
                                <h4 class="care-tip__title">
                                    <span class="care-tip__icon">{icon("heart")}</span>
                                    {tip.title}
                                </h4>
                                <p>{tip.body}</p>
                            </Animated>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
