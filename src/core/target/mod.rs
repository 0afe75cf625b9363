//! Target module.
//!
//! The automation target is passed in rather than looked up globally, so the
//! namer can run against an in-memory target in tests.

mod memory;
mod traits;

pub use memory::RecordingTarget;
pub use traits::Target;
