//! Центр уведомлений: сервис в контексте + хост отрисовки.

mod center;
mod host;

pub use center::{use_notifications, NotificationCenter};
pub use host::ToastHost;
