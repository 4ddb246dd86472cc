mod base;
mod logger;

pub use base::*;
pub use logger::*;
