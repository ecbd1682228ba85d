//! Error types for the Vasari article generation service.
//!
//! Every error family follows the same pattern: a `*ErrorKind` enum
//! naming the specific conditions, wrapped by a `*Error` struct that
//! captures the source location through `#[track_caller]`.
//!
//! # Examples
//!
//! ```
//! use vasari_error::{ClientError, ClientErrorKind};
//!
//! fn fetch() -> Result<String, ClientError> {
//!     Err(ClientError::new(ClientErrorKind::Http(
//!         "Connection refused".to_string(),
//!     )))
//! }
//!
//! match fetch() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod pipeline;
mod store;
mod validation;

pub use client::{ClientError, ClientErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use validation::{FieldError, ValidationError};
