//! Identity gateway adapters.

mod simulated;

pub use simulated::SimulatedGateway;
