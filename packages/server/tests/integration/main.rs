
mod admin;
mod progress;
mod rating;
mod today;
