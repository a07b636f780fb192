//! # slotview
//!
//! Rendering layer for the slotsim storage gas simulator.
//!
//! ## Architecture
//! - **Fragments**: slot list and cache list rendered from simulator state
//! - **Messages**: one-line status text plus the explanation block
//! - **Page**: full HTML document embedding fragments, form and stylesheet
//!
//! Rendering is a pure function of the current state: every view is
//! recomputed from scratch, nothing here mutates the simulator.

#![warn(missing_docs)]

mod message;
mod page;
mod render;

pub use message::{
    clear_explanation, clear_status, explanation_block, load_explanation, load_status,
    ready_explanation, ready_status, rejected_status, store_explanation, store_status,
};
pub use page::render_page;
pub use render::{render_cache, render_slots};
