pub mod classifier;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod storage;
pub mod upload;
