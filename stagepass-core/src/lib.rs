pub mod hotels;
pub mod models;
pub mod repository;

pub use hotels::{HotelsError, HotelsService};
