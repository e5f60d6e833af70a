//! # Router Web Interface
//!
//! Static knowledge about the Commotion router's LuCI pages: where they
//! live and which landmarks identify them. Nothing here talks to a browser.

pub mod locator;
pub mod page;
