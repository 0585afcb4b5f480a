//! User interface and presentation
//!
//! Presenters format firing results and store status for the console,
//! keeping wording out of the firing logic.

pub mod presenters;
