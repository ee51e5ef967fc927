pub mod client;
pub mod formatter;
pub mod models;
pub mod storage;
