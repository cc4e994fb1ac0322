//! Main page: title, tab selector and the active content panel.

use super::view_model::DogWorldVm;
use crate::domain::a001_breed::ui::BreedGallery;
use crate::domain::a002_dog_fact::ui::FactList;
use crate::domain::a003_care_tip::ui::CareTipGrid;
use crate::shared::components::card_animated::{Animated, Entrance};
use crate::shared::icons::icon;
use contracts::enums::content_tab::{ContentTab, PanelFrame};
use contracts::shared::config::PAGE_TITLE;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DogWorldPage() -> impl IntoView {
    let vm = DogWorldVm::new();
    let selected_code = vm.selected_code;

    // Sync selected_code -> state
    Effect::new(move |_| {
        let code = selected_code.get();
        vm.select_code(&code);
    });

    view! {
        <div class="dog-world">
            <div class="dog-world__container">
                <Animated entrance=Entrance::Drop>
                    <h1 class="dog-world__title">{PAGE_TITLE}</h1>
                </Animated>
                <TabBar vm=vm />
                <TabContent vm=vm />
            </div>
        </div>
    }
}

#[component]
fn TabBar(vm: DogWorldVm) -> impl IntoView {
    let tab_icon = |name: &str| view! { <span class="tab-icon">{icon(name)}</span> };

    view! {
        <div class="dog-world__tabs">
            <TabList selected_value=vm.selected_code>
                {ContentTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <Tab value=tab.code()>
                                {tab_icon(tab.icon_name())}
                                {tab.display_name()}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
        </div>
    }
}

#[component]
fn TabContent(vm: DogWorldVm) -> impl IntoView {
    let visible_panels = vm.visible_panels();

    // Rebuilt on every switch, so the entrance animation replays for the new tab.
    move || {
        visible_panels
            .get()
            .into_iter()
            .map(render_panel)
            .collect_view()
    }
}

fn render_panel(tab: ContentTab) -> AnyView {
    let content = match tab {
        ContentTab::Breeds => view! { <BreedGallery /> }.into_any(),
        ContentTab::Facts => view! { <FactList /> }.into_any(),
        ContentTab::Care => view! { <CareTipGrid /> }.into_any(),
    };
    let framed = match tab.panel() {
        PanelFrame::Bare => content,
        PanelFrame::Card { heading } => view! {
            <Card class="panel-card">
                {heading.map(|h| view! { <h2 class="panel-card__heading">{h}</h2> })}
                <div class="panel-card__body">{content}</div>
            </Card>
        }
        .into_any(),
    };

    view! {
        <Animated entrance=Entrance::SlideRight class=format!("tab-panel tab-panel--{}", tab.code())>
            {framed}
        </Animated>
    }
    .into_any()
}
