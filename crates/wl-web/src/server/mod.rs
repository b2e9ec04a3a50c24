//! Server-side infrastructure for the fullstack build.
//!
//! The marketplace backend is an external collaborator; everything here is
//! the plumbing that forwards typed server-function calls to it.

pub mod config;
pub mod upstream;
