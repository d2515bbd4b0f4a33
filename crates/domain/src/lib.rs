#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod code;
mod error;
mod name;
mod plan;
mod preset;
mod service;
mod workout;

pub use code::InvalidCodeError;
pub use error::*;
pub use name::*;
pub use plan::*;
pub use preset::*;
pub use service::*;
pub use workout::*;
