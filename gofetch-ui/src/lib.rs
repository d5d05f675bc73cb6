pub mod client;
pub mod config;
pub mod controller;
pub mod dom;
pub mod render;

pub use gofetch_query as query;
