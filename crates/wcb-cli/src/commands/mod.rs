//! Command implementations for the wcb CLI.
//!
//! - [`build`] - rewrite, minify and copy the component, then write the manifest

pub mod build;
pub mod utils;

pub use build::execute as build_execute;
