// simulation/mod.rs
// Module declarations and re-exports for the scattering engine

pub mod batch;
pub mod forces;
pub mod integrator;
pub mod sampling;

pub use batch::{BatchResult, BatchRunner};
