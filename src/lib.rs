//! Workspace facade: re-exports [`bharat_core`] so the demos can use a
//! single import path.
pub use bharat_core::*;
