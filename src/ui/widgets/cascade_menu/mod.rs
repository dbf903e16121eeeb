//! Cascade Menu Widget
//!
//! A column-per-level terminal menu that drives the `CascadeSelect` engine.
//!
//! # Module Structure
//!
//! - `menu` - CascadeMenu state and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::{key_to_action, run_interactive};
pub use menu::{CascadeMenu, Column, MenuAction, MenuStatus};
pub use render::{render_columns, render_help_bar, render_status_bar};
