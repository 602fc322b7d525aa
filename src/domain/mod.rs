//! Domain model: accounts, transfer requests, and the ports the engine depends on.

pub mod account;
pub mod ports;
pub mod transfer;
