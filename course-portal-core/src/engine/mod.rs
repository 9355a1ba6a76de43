//! Synchronous interaction state
//!
//! Everything here is plain state plus transitions; no I/O. Services drive
//! the gateway and feed results back in.

pub mod course_filter;
mod download_gate;
mod quick_nav;
mod selection;
mod tap_chain;

pub use course_filter::CourseFilter;
pub use download_gate::{DownloadGate, DownloadPermit};
pub use quick_nav::{NavKey, NavOutcome, QuickNav, FOCUS_DELAY, MAX_CANDIDATES};
pub use selection::{
    ClassesPhase, CourseSelection, FetchTicket, Resolution, SelectionMachine, SelectionPhase,
    UnitSelection, UnitsPhase,
};
pub use tap_chain::{TapChain, TAPS_TO_OPEN, TAP_WINDOW};
