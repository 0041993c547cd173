//! Application state module

mod app_state;
mod errors;
mod form;

pub use app_state::*;
pub use errors::*;
pub use form::*;
