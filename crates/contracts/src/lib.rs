//! Platform-independent content and page state for the dog world page.

pub mod domain;
pub mod enums;
pub mod shared;
