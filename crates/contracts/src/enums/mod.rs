pub mod content_tab;
