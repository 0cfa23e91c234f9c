//! UI module for Cleat GUI
//!
//! # Panel Structure
//! - `toolbar` - Header, Reset, theme toggle
//! - `input_panel` - Left: the four field groups plus Check Design / Preview
//! - `results_panel` - Right: latest check results with values and limits
//! - `status_bar` - Bottom status messages
//! - `modal` - Result, preview, file name and notice dialogs

pub mod input_panel;
pub mod modal;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
