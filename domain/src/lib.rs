pub mod errors;
pub mod exporting;
pub mod filtering;
pub mod formatting;
pub mod models;
pub mod repositories;
pub mod screens;
