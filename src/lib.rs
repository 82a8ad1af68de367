//! Resolves the loosely-typed pick lists of a sports prediction into the
//! structured view shown by the admin console's detail and preview screens.

pub mod config;
pub mod core;
pub mod display;
pub mod resolver;
