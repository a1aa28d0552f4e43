//! Outbound ports - Interfaces that the application requires from external systems

mod collaborator_port;

pub use collaborator_port::{CollaboratorPort, GenerateRequest, GenerateResponse};
