//! Adapters between the engine and the outside world.

pub mod csv;
pub mod rejection;
