pub mod config;
pub mod data_transfer;
pub mod fields;
pub mod relay;
pub mod session;
pub mod submit;
