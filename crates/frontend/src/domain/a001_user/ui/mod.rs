pub mod details;
pub mod invite;
pub mod list;
