pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod file_input;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod modal_frame;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
pub mod settings;
pub mod simulation;
pub mod toast;
