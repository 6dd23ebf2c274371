//! Core error types shared across the workspace.
//!
//! # Re-exports
//!
//! [`SolverError`] and [`RootFindingFailure`] from `error`.

pub mod error;

pub use error::{RootFindingFailure, SolverError};
