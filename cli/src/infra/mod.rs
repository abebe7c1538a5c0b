//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: host name and interface
//! queries, DNS, topology loading, jar lookup, and process execution.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod fs;
pub mod launcher;
pub mod network;
