//! Output formatting for calculation results.
//!
//! This module handles rendering results for the command line:
//! - [`json`] - JSON payloads
//! - [`table`] - Quoted CSV-style rows for the terminal
//! - [`terminal`] - Field formatting helpers

mod json;
mod table;
mod terminal;

pub use json::{error_to_json, to_json};
pub use table::{render_cover, render_next_subnet, render_subnetting, render_supernets};
pub use terminal::{format_field, header};
