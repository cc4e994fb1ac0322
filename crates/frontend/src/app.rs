use crate::pages::dog_world::DogWorldPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DogWorldPage />
        </ConfigProvider>
    }
}
