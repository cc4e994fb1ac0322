//! CardAnimated — Thaw Card wrapper with an entrance animation.
//!
//! Keyframes live in `style/main.css` (`@keyframes enter-*`).
//!
//! # Example
//! ```ignore
//! // Staggered delay
//! <CardAnimated entrance=Entrance::Rise delay_ms=stagger_delay_ms(0)>   // card 1
//! <CardAnimated entrance=Entrance::Rise delay_ms=stagger_delay_ms(1)>   // card 2
//!
//! // Without a card
//! <Animated entrance=Entrance::Drop>
//!     <h1>"..."</h1>
//! </Animated>
//! ```

use contracts::shared::config::STAGGER_STEP_MS;
use leptos::prelude::*;
use thaw::Card;

/// Default entrance duration, ms.
pub const ENTER_DURATION_MS: u32 = 500;

/// Direction of an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Entrance {
    /// Fade in while moving up.
    #[default]
    Rise,
    /// Fade in while moving down (from above).
    Drop,
    /// Fade in from the right.
    SlideRight,
    /// Fade in from the left.
    SlideLeft,
    /// Fade in without moving.
    Fade,
}

impl Entrance {
    pub fn keyframes(&self) -> &'static str {
        match self {
            Entrance::Rise => "enter-rise",
            Entrance::Drop => "enter-drop",
            Entrance::SlideRight => "enter-from-right",
            Entrance::SlideLeft => "enter-from-left",
            Entrance::Fade => "enter-fade",
        }
    }
}

/// Inline `animation:` declaration for an entrance.
pub fn entrance_style(entrance: Entrance, duration_ms: u32, delay_ms: u32) -> String {
    format!(
        "animation: {} {}ms ease-out {}ms both;",
        entrance.keyframes(),
        duration_ms,
        delay_ms
    )
}

/// Delay of the `index`-th item in a staggered list.
pub fn stagger_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

fn full_style(entrance: Entrance, duration_ms: u32, delay_ms: u32, extra: &str) -> String {
    let animation = entrance_style(entrance, duration_ms, delay_ms);
    if extra.is_empty() {
        animation
    } else {
        format!("{} {}", animation, extra)
    }
}

/// Thaw [`Card`] with an entrance animation.
///
/// # Props
/// - `entrance`    — animation direction (`Rise` by default).
/// - `duration_ms` — duration, [`ENTER_DURATION_MS`] by default.
/// - `delay_ms`    — animation delay in ms, for staggered lists.
/// - `class`       — extra CSS classes for the card.
#[component]
pub fn CardAnimated(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] duration_ms: Option<u32>,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let style = full_style(
        entrance,
        duration_ms.unwrap_or(ENTER_DURATION_MS),
        delay_ms,
        &style,
    );

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}

/// Same animation without the card chrome.
#[component]
pub fn Animated(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] duration_ms: Option<u32>,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = entrance_style(entrance, duration_ms.unwrap_or(ENTER_DURATION_MS), delay_ms);

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
