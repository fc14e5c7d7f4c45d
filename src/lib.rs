pub mod core;

pub use crate::core::error::{Result, SimError};
