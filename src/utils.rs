pub mod log;
pub mod sql;
