//! Utility modules

pub mod http;
pub mod path;
