pub mod identity;
pub mod interface;
pub mod prefix;
