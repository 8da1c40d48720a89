//! Template bodies.
//!
//! Each body is a typed parameter record built from a [`RenderContext`]
//! (`from_context`) plus a pure `render`. The record lists exactly the fields
//! the body consumes.
//!
//! [`RenderContext`]: crate::catalog::RenderContext

pub mod gradle;
pub mod java;
pub mod resources;
