//! # Domain Layer
//!
//! Wire models, client configuration and the error type.
//! This layer does not depend on the HTTP stack.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
