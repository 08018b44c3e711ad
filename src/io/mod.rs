//! Format-specific reading and writing helpers shared by the loaders and plan writers.

pub(crate) mod csv;
