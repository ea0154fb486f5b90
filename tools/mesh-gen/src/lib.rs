//! mesh-gen library
//!
//! Manifest loading and scene building, shared by the `mesh-gen` binary and
//! its integration tests.

pub mod manifest;
