//! Shared domain types for nodeprobe.
//!
//! Everything here is pure data or pure logic: interface snapshots, the
//! resolved [`network::identity::NetworkIdentity`], configuration and the
//! router page tables. Anything that touches the host lives in
//! `nodeprobe-core`.

pub mod browser;
pub mod config;
pub mod error;
pub mod network;
pub mod router;
pub mod system;
pub mod utils;
