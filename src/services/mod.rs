//! Ship services
//!
//! This module contains the interactive command loop that drives the
//! ship's fire control.

pub mod console;
