mod error;
pub mod form;
mod settings;
pub mod submit;
pub mod util;
pub mod view;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use error::*;
pub use settings::*;
