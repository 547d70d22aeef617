//! Parsed translation resources.
pub mod translation;
