mod constants;
mod slot;

pub mod dto;
pub use constants::*;
pub use slot::*;
