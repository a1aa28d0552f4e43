//! Application layer - Services orchestrating the domain, and the ports they depend on

pub mod ports;
pub mod services;
