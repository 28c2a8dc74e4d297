mod human;

pub use human::*;
