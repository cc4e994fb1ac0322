//! Compile-time settings shared by the page and its content tables.

/// Page title shown above the tab selector.
pub const PAGE_TITLE: &str = "Paw-some Dog World";

/// Placeholder image service used for breed pictures.
pub const IMAGE_SERVICE_BASE: &str = "https://source.unsplash.com";

/// Requested image dimensions, `<width>x<height>`.
pub const IMAGE_SIZE: &str = "400x300";

/// Delay between consecutive items of a staggered entrance animation.
pub const STAGGER_STEP_MS: u32 = 100;
