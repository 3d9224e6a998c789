pub mod list;
pub mod upload;
