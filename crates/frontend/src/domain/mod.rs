pub mod a001_user;
pub mod a002_product;
pub mod a003_content;
pub mod a004_file;
pub mod a005_report;
pub mod a006_custom_field;
pub mod a007_feed_notification;
