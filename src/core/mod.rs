pub mod bread;
pub mod calendar;
pub mod compass;
pub mod config;
pub mod replay;
pub mod rotation;
