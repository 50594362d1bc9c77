pub mod gallery;
pub mod service;

pub use gallery::*;
pub use service::*;
