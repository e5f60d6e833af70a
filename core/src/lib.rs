//! Host-facing side of nodeprobe: interface enumeration, identity
//! resolution, session setup and page checks.

pub mod pages;
pub mod resolver;
pub mod session;
pub mod system;
