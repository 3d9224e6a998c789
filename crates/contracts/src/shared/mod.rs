pub mod format;
pub mod list_view;
pub mod notifications;
pub mod validation;
