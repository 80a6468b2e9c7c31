//! # formsmith-core - Core Domain Types
//!
//! Foundation crate for Formsmith. Provides the field entity model, the
//! generated output type, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, uuid).
//!
//! ## Public API
//!
//! ### Field Model (`field`)
//! - [`Field`] - One label/value row
//! - [`FieldId`] - Opaque unique identifier of a field
//! - [`FieldChanges`] - Partial update of a field's label and/or value
//!
//! ### Output (`output`)
//! - [`GeneratedOutput`] - Title, formatted content and generation time
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use formsmith_core::prelude::*;
//! ```

pub mod error;
pub mod field;
pub mod logging;
pub mod output;

/// Prelude for common imports used throughout all Formsmith crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use field::{Field, FieldChanges, FieldId};
pub use output::GeneratedOutput;
