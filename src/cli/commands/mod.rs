pub mod bread;
pub mod calendar;
pub mod compass;
pub mod config;
pub mod export;
pub mod init;
pub mod owner;
pub mod today;
