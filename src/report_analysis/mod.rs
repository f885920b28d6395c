//! Report analysis domain layer
//!
//! Pure domain models and services for turning SBOM and vulnerability-scan
//! documents into normalized collections and aggregate statistics. Nothing in
//! this layer performs I/O.
pub mod domain;
pub mod services;
