//! Host callbacks as data.
//!
//! A host translates each UI callback into an `ExpressionEvent` and hands it to
//! the `ExpressionEditor`, which owns the single authoritative tree.

use super::editor::{ConditionUpdate, GroupUpdate};
use super::layout::GroupLayout;
use super::node::{ExpressionTree, SelectionOption, TriggerType};
use crate::error::EditError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Position of a condition row, either at the root or inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodePath {
    Root(usize),
    Sub { group: usize, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ExpressionEvent {
    ChangeResource {
        path: NodePath,
        selection: Vec<SelectionOption>,
    },
    ChangeOperator {
        path: NodePath,
        selection: Vec<SelectionOption>,
    },
    ChangeValue {
        path: NodePath,
        value: String,
    },
    Delete {
        path: NodePath,
    },
    /// `group: None` adds to the root.
    AddCondition {
        group: Option<usize>,
    },
    AddGroup,
    ChangeTrigger {
        group: Option<usize>,
        selection: Vec<SelectionOption>,
    },
    ChangeCustomLogic {
        group: Option<usize>,
        value: String,
    },
    /// Text of the root formula editor.
    ChangeFormula {
        value: String,
    },
}

impl ExpressionTree {
    /// Applies one host event and returns the resulting tree.
    pub fn apply(&self, event: &ExpressionEvent) -> Result<Self, EditError> {
        match event {
            ExpressionEvent::ChangeResource { path, selection } => {
                self.update_at(*path, &ConditionUpdate::Resource(selection.clone()))
            }
            ExpressionEvent::ChangeOperator { path, selection } => {
                self.update_at(*path, &ConditionUpdate::Operator(selection.clone()))
            }
            ExpressionEvent::ChangeValue { path, value } => {
                self.update_at(*path, &ConditionUpdate::Value(value.clone()))
            }
            ExpressionEvent::Delete { path } => match *path {
                NodePath::Root(index) => self.delete_condition(index),
                NodePath::Sub { group, index } => self.delete_sub_condition(group, index),
            },
            ExpressionEvent::AddCondition { group: None } => Ok(self.add_condition()),
            ExpressionEvent::AddCondition { group: Some(group) } => {
                self.add_sub_condition(*group)
            }
            ExpressionEvent::AddGroup => Ok(self.add_group()),
            ExpressionEvent::ChangeTrigger { group, selection } => {
                let Some(trigger) = TriggerType::from_selection(selection) else {
                    warn!(?selection, "ignoring undecodable trigger selection");
                    return Ok(self.clone());
                };
                match group {
                    None => Ok(self.with_trigger_type(trigger)),
                    Some(group) => {
                        self.update_group_field(*group, &GroupUpdate::TriggerType(trigger))
                    }
                }
            }
            ExpressionEvent::ChangeCustomLogic { group, value } => match group {
                None => Ok(self.with_custom_logic(value.clone())),
                Some(group) => {
                    self.update_group_field(*group, &GroupUpdate::CustomLogic(value.clone()))
                }
            },
            ExpressionEvent::ChangeFormula { value } => Ok(self.with_formula(value.clone())),
        }
    }

    fn update_at(&self, path: NodePath, update: &ConditionUpdate) -> Result<Self, EditError> {
        match path {
            NodePath::Root(index) => self.update_field(index, update),
            NodePath::Sub { group, index } => self.update_sub_field(group, index, update),
        }
    }

    pub fn layout(&self) -> GroupLayout {
        GroupLayout::of(self.trigger_type, true)
    }
}

/// Holds the tree a host renders and applies events to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionEditor {
    tree: ExpressionTree,
}

impl ExpressionEditor {
    pub fn new(tree: ExpressionTree) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &ExpressionTree {
        &self.tree
    }

    pub fn into_tree(self) -> ExpressionTree {
        self.tree
    }

    /// Applies `event`. On error the held tree is left untouched.
    pub fn dispatch(&mut self, event: &ExpressionEvent) -> Result<&ExpressionTree, EditError> {
        let next = self.tree.apply(event).inspect_err(|e| {
            warn!(?event, error = %e, "expression edit rejected");
        })?;
        debug!(?event, len = next.len(), "expression edit applied");
        self.tree = next;
        Ok(&self.tree)
    }
}
