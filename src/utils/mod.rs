//! Shared utilities for IO, Arrow conversion and logging

pub mod arrow;
pub mod io;
pub mod logging;
