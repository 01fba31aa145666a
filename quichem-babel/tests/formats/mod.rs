//! The formats that are code rather than tables, and the registry that holds them all.

mod quichem;
mod registry;
mod repr;
mod treeviz;
