pub mod config;
pub mod documents;
pub mod provider;
