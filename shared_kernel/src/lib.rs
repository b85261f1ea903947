pub mod configuration;
pub mod document_id;
pub mod http_client;
mod ids;
mod non_empty_string;
pub mod tracing;

pub use document_id::DocumentId;
