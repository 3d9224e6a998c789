//! Константы приложения.

pub use contracts::shared::notifications::DEFAULT_DURATION_MS as TOAST_DURATION_MS;

pub const APP_TITLE: &str = "Admin Dashboard";
pub const APP_SUBTITLE: &str = "Control center";

const MB: f64 = 1024.0 * 1024.0;

/// Product catalogue CSV import.
pub const PRODUCT_IMPORT_MAX_BYTES: f64 = 5.0 * MB;
pub const PRODUCT_IMPORT_EXTENSIONS: &[&str] = &["csv"];

/// User CSV import.
pub const USER_IMPORT_MAX_BYTES: f64 = 5.0 * MB;
pub const USER_IMPORT_EXTENSIONS: &[&str] = &["csv"];

/// Data & Insights import.
pub const DATA_IMPORT_MAX_BYTES: f64 = 10.0 * MB;
pub const DATA_IMPORT_EXTENSIONS: &[&str] = &["csv", "xlsx", "json"];

/// Files page upload, any type.
pub const FILE_UPLOAD_MAX_BYTES: f64 = 50.0 * MB;

/// Simulated progress step, ms.
pub const PROGRESS_TICK_MS: u32 = 200;
/// Simulated progress increment per tick, percent.
pub const PROGRESS_STEP: u32 = 10;

/// Real-time refresh period of the insights page, ms.
pub const REALTIME_REFRESH_MS: u32 = 5000;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 25, 50];

pub const TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Los_Angeles",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Tokyo",
];
