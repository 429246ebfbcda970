//! Core library for the receipt points service.
//!
//! Receipts are submitted once, held in a process-memory store for the life of
//! the process, and scored on demand with a fixed additive rule set. The HTTP
//! router and service facade live here so binaries and tests can compose them
//! with whatever store implementation suits the deployment.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
