//! Data models for extracted DANFE documents and pipeline configuration.

pub mod config;
pub mod document;
