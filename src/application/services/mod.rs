//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod traversal;

pub use traversal::{BstWalk, ChestWalk, TraversalService, MAX_SHAPE_HEIGHT};
