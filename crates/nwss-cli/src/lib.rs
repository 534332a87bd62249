//! Library side of the `nwss` command-line validator.

#![deny(unsafe_code)]

pub mod logging;
pub mod pipeline;
pub mod summary;
