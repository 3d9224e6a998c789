pub mod details;
pub mod editor;
pub mod list;
