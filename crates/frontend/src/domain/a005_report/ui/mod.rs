pub mod builder;
pub mod list;
pub mod schedule;
