mod resolution;
mod session;
mod util;
