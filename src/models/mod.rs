pub mod calendar_entry;
pub mod direction;
pub mod owner;
pub mod sample;
