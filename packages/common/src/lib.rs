pub mod catalog;
pub mod config;
pub mod day;
pub mod event;
pub mod intake;
pub mod progress;
pub mod rating;
pub mod storage;
pub mod user;

pub use day::{DayRangeError, EventDay};
