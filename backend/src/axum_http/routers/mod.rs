pub mod pages;
pub mod uploads;
