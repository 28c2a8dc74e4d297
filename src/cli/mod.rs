mod args;
mod console;

pub use args::*;
pub use console::*;
