//! Command line front ends.

pub mod ctl;
