//! Post-processing shared by the display backends.

pub mod merge;
