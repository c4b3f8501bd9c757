//! Core validation types and traits
//!
//! The fundamental building blocks of the engine:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type and return
//! `Result<(), ValidationError>`; a failed check is a value, never a
//! panic or a thrown fault. Composition happens through the combinator
//! methods on [`ValidateExt`], which every validator gets for free.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
