//! Breed gallery: one card per breed from the fixed table.

use crate::shared::components::card_animated::{stagger_delay_ms, CardAnimated, Entrance};
use crate::shared::icons::icon;
use contracts::domain::a001_breed::{BreedEntry, BREEDS};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BreedGallery() -> impl IntoView {
    view! {
        <div class="content-grid content-grid--3">
            {BREEDS
                .iter()
                .enumerate()
                .map(|(index, breed)| view! { <BreedCard breed=*breed index=index /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn BreedCard(breed: BreedEntry, index: usize) -> impl IntoView {
    let name = breed.name;
    // No fallback for a broken image, the browser shows its default.
    let on_image_error = move |_| log::warn!("breed image failed to load: {}", breed.image_url());

    view! {
        <CardAnimated entrance=Entrance::Rise delay_ms=stagger_delay_ms(index) class="breed-card">
            <div class="breed-card__header">
                <h3 class="breed-card__title">{name}</h3>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    <span class="badge-icon">{icon("paw")}</span>
                    "Popular"
                </Badge>
            </div>
            <img
                class="breed-card__image"
                src=breed.image_url()
                alt=name
                on:error=on_image_error
            />
            <p class="breed-card__description">{breed.description()}</p>
            // Inert: no action is attached.
            <Button appearance=ButtonAppearance::Secondary attr:style="width: 100%;">
                "Learn More"
                <span class="button-icon">{icon("chevron-right")}</span>
            </Button>
        </CardAnimated>
    }
}
