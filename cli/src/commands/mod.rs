//! Command implementations

pub mod check;
pub mod launch;
pub mod plan;
pub mod version;
