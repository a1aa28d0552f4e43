//! Infrastructure layer - Adapters for external systems and shared state

pub mod history;
pub mod ollama;
