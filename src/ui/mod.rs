//! Terminal front-end for the selection engine

pub mod terminal;
pub mod theme;
pub mod widgets;

pub use widgets::cascade_menu::{run_interactive, CascadeMenu, MenuAction, MenuStatus};
