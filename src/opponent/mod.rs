mod counter;
mod random;

pub use counter::*;
pub use random::*;
