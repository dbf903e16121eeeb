//! CascadeMenu state management and action handling.
//!
//! The menu shows one column per level of the engine's working value. It
//! keeps a cursor per column and forwards every activation to the
//! `CascadeSelect` engine, which owns the selection itself.

use crate::config::ExpandTrigger;
use crate::engine::CascadeSelect;
use crate::models::{CascadeOption, OptionTree};

use super::render::{render_columns, render_help_bar, render_status_bar};
use crate::ui::theme::Icons;

/// One visible level of the menu
#[derive(Debug, Clone)]
pub struct Column<'a> {
    /// Level (0 = roots)
    pub depth: usize,
    /// Sibling nodes at this level
    pub items: &'a [CascadeOption],
    /// Cursor row within `items`
    pub cursor: usize,
    /// Key selected at this level in the working value
    pub selected: Option<&'a str>,
    /// Whether keyboard focus is in this column
    pub focused: bool,
}

/// Cascade menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Open the branch under the cursor
    Expand,
    /// Move focus to the parent level
    Collapse,
    /// Pick the node under the cursor
    Pick,
    /// Clear the selection
    Clear,
    /// Accept the committed value
    Confirm,
    /// Quit without accepting
    Quit,
}

/// What the interactive loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    /// Keep the menu open
    Open,
    /// A terminal pick or confirmation closed the panel
    Done,
    /// Closed without accepting
    Cancelled,
}

/// Interactive cascade menu over an option tree
pub struct CascadeMenu {
    tree: OptionTree,
    select: CascadeSelect,
    cursors: Vec<usize>,
    focus: usize,
}

impl CascadeMenu {
    /// Create a menu over `tree`, pre-expanded along the engine's working value
    pub fn new(tree: OptionTree, mut select: CascadeSelect) -> Self {
        select.set_panel_open(true);
        let mut menu = Self {
            tree,
            select,
            cursors: Vec::new(),
            focus: 0,
        };
        menu.sync_cursors();
        menu
    }

    /// Rebuild cursors from the working value
    fn sync_cursors(&mut self) {
        let working = self.select.working_value().to_vec();
        let mut cursors = Vec::with_capacity(working.len() + 1);
        for (depth, key) in working.iter().enumerate() {
            let row = self
                .items_at(depth)
                .iter()
                .position(|n| &n.key == key)
                .unwrap_or(0);
            cursors.push(row);
        }
        self.focus = working.len().saturating_sub(1);
        if cursors.is_empty() {
            cursors.push(0);
        }
        self.cursors = cursors;
    }

    /// Siblings at `depth`, following the working value
    fn items_at(&self, depth: usize) -> &[CascadeOption] {
        if depth == 0 {
            return &self.tree;
        }
        self.select
            .resolved_options()
            .get(depth - 1)
            .map(|parent| parent.children.as_slice())
            .unwrap_or(&[])
    }

    fn column_count(&self) -> usize {
        let resolved = self.select.resolved_options();
        let open_branch = resolved.last().is_some_and(|last| !last.is_leaf());
        (resolved.len() + usize::from(open_branch)).max(1)
    }

    /// All columns along the working value
    pub fn columns(&self) -> Vec<Column<'_>> {
        let working = self.select.working_value();
        (0..self.column_count())
            .map(|depth| Column {
                depth,
                items: self.items_at(depth),
                cursor: self.cursors.get(depth).copied().unwrap_or(0),
                selected: working.get(depth).map(String::as_str),
                focused: depth == self.focus,
            })
            .collect()
    }

    /// The deepest `cascade_size` columns, shifted so focus stays visible
    pub fn visible_columns(&self) -> Vec<Column<'_>> {
        let columns = self.columns();
        let size = self.select.config().cascade_size.max(1);
        let mut start = columns.len().saturating_sub(size);
        if self.focus < start {
            start = self.focus;
        }
        columns.into_iter().skip(start).take(size).collect()
    }

    pub fn engine(&self) -> &CascadeSelect {
        &self.select
    }

    pub fn into_engine(self) -> CascadeSelect {
        self.select
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn cursor_position(&self) -> usize {
        self.cursors.get(self.focus).copied().unwrap_or(0)
    }

    fn current_item(&self) -> Option<CascadeOption> {
        self.items_at(self.focus)
            .get(self.cursor_position())
            .cloned()
    }

    fn set_cursor(&mut self, row: usize) {
        if self.cursors.len() <= self.focus {
            self.cursors.resize(self.focus + 1, 0);
        }
        self.cursors[self.focus] = row;
    }

    /// Pick the item under the cursor at the focused level
    fn pick_current(&mut self) -> MenuStatus {
        let Some(item) = self.current_item() else {
            return MenuStatus::Open;
        };
        let outcome = self.select.select(self.focus, &item);
        if !outcome.applied {
            return MenuStatus::Open;
        }

        self.cursors.truncate(self.focus + 1);
        if outcome.close_requested {
            return MenuStatus::Done;
        }
        if !item.is_leaf() {
            self.focus += 1;
            self.cursors.push(0);
        }
        MenuStatus::Open
    }

    fn hover_expand(&mut self) {
        if self.select.config().expand_trigger != ExpandTrigger::Hover {
            return;
        }
        let Some(item) = self.current_item() else {
            return;
        };
        if !item.is_leaf() {
            self.select.select(self.focus, &item);
            self.cursors.truncate(self.focus + 1);
        }
    }

    /// Handle a menu action
    pub fn handle_action(&mut self, action: MenuAction) -> MenuStatus {
        match action {
            MenuAction::Up => {
                let row = self.cursor_position();
                if row > 0 {
                    self.set_cursor(row - 1);
                    self.hover_expand();
                }
                MenuStatus::Open
            }
            MenuAction::Down => {
                let row = self.cursor_position();
                if row + 1 < self.items_at(self.focus).len() {
                    self.set_cursor(row + 1);
                    self.hover_expand();
                }
                MenuStatus::Open
            }
            MenuAction::Expand => {
                match self.current_item() {
                    Some(item) if !item.is_leaf() => self.pick_current(),
                    _ => MenuStatus::Open,
                }
            }
            MenuAction::Collapse => {
                self.focus = self.focus.saturating_sub(1);
                MenuStatus::Open
            }
            MenuAction::Pick => self.pick_current(),
            MenuAction::Clear => {
                self.select.clear();
                self.sync_cursors();
                MenuStatus::Open
            }
            MenuAction::Confirm => {
                self.select.set_panel_open(false);
                MenuStatus::Done
            }
            MenuAction::Quit => {
                self.select.resync_working(&self.tree);
                self.select.set_panel_open(false);
                MenuStatus::Cancelled
            }
        }
    }

    /// Render the columns to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        render_columns(&self.visible_columns(), Icons::for_terminal(supports_unicode))
    }

    /// Render the committed summary and in-progress path
    pub fn render_status_bar(&self) -> String {
        render_status_bar(&self.select)
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.select.config().clearable)
    }
}
