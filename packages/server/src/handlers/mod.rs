pub mod admin;
pub mod progress;
pub mod rating;
pub mod today;
