use crate::shared::components::card_animated::{entrance_style, stagger_delay_ms, Entrance};
use crate::shared::icons::icon;
use contracts::domain::a002_dog_fact::FACTS;
use leptos::prelude::*;

const ITEM_DURATION_MS: u32 = 300;
const LIST_DURATION_MS: u32 = 500;

/// Fixed list of dog facts, two columns on wide screens.
#[component]
pub fn FactList() -> impl IntoView {
    view! {
        <ul class="fact-list" style=entrance_style(Entrance::Fade, LIST_DURATION_MS, 0)>
            {FACTS
                .iter()
                .enumerate()
                .map(|(index, fact)| {
                    let style = entrance_style(
                        Entrance::SlideLeft,
                        ITEM_DURATION_MS,
                        stagger_delay_ms(index),
                    );
                    view! {
                        <li class="fact-list__item" style=style>
                            <span class="fact-list__icon">{icon("info")}</span>
                            {fact.text}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
