//! Application layer: services and use cases
//!
//! This layer loads inputs (chest files, settings) and drives the domain cursors.

pub mod chest_file;
pub mod error;
pub mod error_ext;
pub mod services;

pub use chest_file::{load_chest, parse_chest};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
