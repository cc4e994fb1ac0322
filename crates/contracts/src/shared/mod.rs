pub mod config;
pub mod tab_state;
