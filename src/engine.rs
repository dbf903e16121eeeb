//! Cascading selection state machine.
//!
//! `CascadeSelect` owns the selection state of one cascading selector:
//!
//! - `working_value`: the deepest pick so far, advanced on every pick
//! - `display_value`: the committed value, safe to show in the summary
//! - `resolved_options`: option nodes parallel to `working_value`
//! - `panel_open`: whether the level chooser is visible
//!
//! A pick on a leaf always commits; a pick on a branch only commits when
//! `change_on_select` is set. Every pick notifies the change listener,
//! committed or not.

use std::fmt;

use crate::config::CascadeConfig;
use crate::models::{CascadeOption, ValuePath};
use crate::resolver;
use crate::summary::{DefaultFormatter, SummaryFormatter};

/// Receives the working value and resolved options after every pick and clear
pub trait ChangeListener {
    fn on_change(&mut self, value: &[String], options: &[CascadeOption]);
}

impl<F> ChangeListener for F
where
    F: FnMut(&[String], &[CascadeOption]),
{
    fn on_change(&mut self, value: &[String], options: &[CascadeOption]) {
        self(value, options)
    }
}

/// A node activation reported by the menu collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// Key of the picked node
    pub key: String,
    /// Level the node was picked at (0 = top level)
    pub depth: usize,
    /// The picked node itself
    pub option: CascadeOption,
    /// Whether the node has no children
    pub is_leaf: bool,
}

impl Pick {
    /// Build a pick from a node, deriving key and leafness from it
    pub fn from_option(depth: usize, option: &CascadeOption) -> Self {
        Self {
            key: option.key.clone(),
            depth,
            option: option.clone(),
            is_leaf: option.is_leaf(),
        }
    }
}

/// Result of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickOutcome {
    /// The pick changed the working value (false when disabled)
    pub applied: bool,
    /// `display_value` now equals `working_value`
    pub committed: bool,
    /// The pick was terminal and the panel was closed
    pub close_requested: bool,
}

impl PickOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Named view over the implicit selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `display_value == working_value`
    Settled,
    /// The working value has moved past the committed one
    InProgress,
}

/// Cascading selector state
pub struct CascadeSelect {
    config: CascadeConfig,
    working_value: ValuePath,
    display_value: ValuePath,
    resolved_options: Vec<CascadeOption>,
    panel_open: bool,
    listener: Option<Box<dyn ChangeListener>>,
}

impl fmt::Debug for CascadeSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadeSelect")
            .field("config", &self.config)
            .field("working_value", &self.working_value)
            .field("display_value", &self.display_value)
            .field("resolved_options", &self.resolved_options.len())
            .field("panel_open", &self.panel_open)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl CascadeSelect {
    /// Create a selector seeded from `config.value`, else `config.default_value`
    pub fn new(tree: &[CascadeOption], config: CascadeConfig) -> Self {
        let initial = config.initial_value();
        let mut select = Self {
            config,
            working_value: Vec::new(),
            display_value: Vec::new(),
            resolved_options: Vec::new(),
            panel_open: false,
            listener: None,
        };
        select.set_value(tree, initial);
        select
    }

    /// Builder-style listener
    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.set_listener(listener);
        self
    }

    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// Replace the configuration; the selection itself is left untouched
    pub fn set_config(&mut self, config: CascadeConfig) {
        self.config = config;
    }

    /// Replace the authoritative value.
    ///
    /// The value is resolved against `tree` as given here. If it does not
    /// match, the selection collapses to empty rather than keeping the
    /// previous value.
    pub fn set_value(&mut self, tree: &[CascadeOption], value: ValuePath) {
        let resolved = resolver::resolve(tree, &value);

        if !value.is_empty() && resolved.is_empty() {
            tracing::debug!(?value, "value does not match option tree, clearing selection");
            self.working_value.clear();
            self.display_value.clear();
            self.resolved_options.clear();
            return;
        }

        tracing::debug!(?value, "value replaced");
        self.working_value = value.clone();
        self.display_value = value;
        self.resolved_options = resolved;
    }

    /// Restore the working value to the committed one, e.g. before reopening
    pub fn resync_working(&mut self, tree: &[CascadeOption]) {
        let display = self.display_value.clone();
        self.set_value(tree, display);
    }

    /// Apply a node activation at `pick.depth`.
    ///
    /// Deeper selections under the previous branch are discarded. A depth past
    /// the current working value appends at the next free level.
    pub fn pick(&mut self, pick: Pick) -> PickOutcome {
        if self.config.disabled {
            tracing::debug!(key = %pick.key, "pick ignored while disabled");
            return PickOutcome::ignored();
        }

        let Pick {
            key,
            depth,
            option,
            is_leaf,
        } = pick;

        self.working_value.truncate(depth);
        self.working_value.push(key);
        self.resolved_options.truncate(depth);
        self.resolved_options.push(option);

        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&self.working_value, &self.resolved_options);
        }

        let committed = self.config.change_on_select || is_leaf;
        if committed {
            self.display_value = self.working_value.clone();
        }
        if is_leaf {
            self.panel_open = false;
        }

        tracing::debug!(
            value = ?self.working_value,
            depth,
            is_leaf,
            committed,
            "picked"
        );

        PickOutcome {
            applied: true,
            committed,
            close_requested: is_leaf,
        }
    }

    /// Pick `option` at `depth`, deriving key and leafness from the node
    pub fn select(&mut self, depth: usize, option: &CascadeOption) -> PickOutcome {
        self.pick(Pick::from_option(depth, option))
    }

    /// Reset the selection and notify the listener with empty arguments.
    ///
    /// Panel visibility is left as is.
    pub fn clear(&mut self) {
        self.working_value.clear();
        self.display_value.clear();
        self.resolved_options.clear();

        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&[], &[]);
        }
        tracing::debug!("selection cleared");
    }

    /// Show or hide the level chooser. Ignored while disabled.
    pub fn set_panel_open(&mut self, visible: bool) {
        if self.config.disabled {
            tracing::debug!(visible, "visibility change ignored while disabled");
            return;
        }
        self.panel_open = visible;
    }

    pub fn working_value(&self) -> &[String] {
        &self.working_value
    }

    pub fn display_value(&self) -> &[String] {
        &self.display_value
    }

    pub fn resolved_options(&self) -> &[CascadeOption] {
        &self.resolved_options
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn regime(&self) -> Regime {
        if self.display_value == self.working_value {
            Regime::Settled
        } else {
            Regime::InProgress
        }
    }

    pub fn is_settled(&self) -> bool {
        self.regime() == Regime::Settled
    }

    /// Whether the clear affordance should be offered
    pub fn can_clear(&self) -> bool {
        !self.config.disabled && self.config.clearable && !self.display_value.is_empty()
    }

    /// Resolved options matching the committed value.
    ///
    /// Empty while the working path has left the committed branch.
    pub fn display_options(&self) -> &[CascadeOption] {
        let len = self.display_value.len();
        let consistent = self.resolved_options.len() >= len
            && self
                .resolved_options
                .iter()
                .zip(&self.display_value)
                .all(|(option, key)| &option.key == key);
        if consistent {
            &self.resolved_options[..len]
        } else {
            &[]
        }
    }

    /// Format the committed value, or `None` when nothing is committed
    pub fn summary_with(&self, formatter: &dyn SummaryFormatter) -> Option<String> {
        if self.display_value.is_empty() {
            return None;
        }
        Some(formatter.format(&self.display_value, self.display_options()))
    }

    /// Default summary using the configured separator, or the placeholder
    pub fn summary(&self) -> String {
        let formatter = DefaultFormatter::with_separator(self.config.separator.clone());
        self.summary_with(&formatter)
            .unwrap_or_else(|| self.config.placeholder.clone())
    }
}
