mod constants;
mod endpoints;

pub use constants::*;
pub use endpoints::*;
