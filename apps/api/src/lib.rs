pub mod applications;
pub mod catalog;
pub mod client;
pub mod config;
pub mod errors;
pub mod filtering;
pub mod routes;
pub mod state;
