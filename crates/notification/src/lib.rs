pub mod lead;
mod service;

pub use service::*;
