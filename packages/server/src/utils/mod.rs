pub mod catalog;
pub mod jwt;
