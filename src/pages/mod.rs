//! Routed pages.

pub mod bin_management;
pub mod dashboard;
pub mod signup;
