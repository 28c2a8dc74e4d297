//! HTTP adapter: explicit sessions, one route per core operation.
//! Tokens on the wire are the single letters "r"/"p"/"s" and "w"/"l"/"t".

mod request;
mod response;
mod server;
mod tables;

pub use request::*;
pub use response::*;
pub use server::*;
pub use tables::*;
