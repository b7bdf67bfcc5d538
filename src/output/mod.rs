//! Console output and layout manifests

pub mod manifest;
pub mod text;
