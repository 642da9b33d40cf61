pub mod batch;
pub mod config;
pub mod covers;
pub mod errors;
pub mod links;
pub mod llm_client;
pub mod models;
pub mod recommend;
pub mod render;
