//! Application layer orchestrating transfers.
//!
//! This module defines the `TransferEngine`, which validates transfer requests,
//! serializes access to the two accounts involved, and reports each completed
//! transfer through the notification port.

pub mod engine;
