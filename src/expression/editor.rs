//! Structural edits on an `ExpressionTree`.
//!
//! Every edit borrows the tree and returns a new one, so a host can keep the
//! previous tree around or drop it. Rows are addressed by position.

use super::node::{Condition, ExpressionTree, Group, Node, NodeKind, SelectionOption, TriggerType};
use crate::error::EditError;
use tracing::debug;

/// A change to one field of a condition row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionUpdate {
    Resource(Vec<SelectionOption>),
    Operator(Vec<SelectionOption>),
    Value(String),
}

impl ConditionUpdate {
    fn apply(&self, condition: &mut Condition) {
        match self {
            ConditionUpdate::Resource(selection) => condition.resource = first_id(selection),
            ConditionUpdate::Operator(selection) => condition.operator = first_id(selection),
            ConditionUpdate::Value(text) => condition.value = text.clone(),
        }
    }
}

/// A change to the settings of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupUpdate {
    TriggerType(TriggerType),
    CustomLogic(String),
}

fn first_id(selection: &[SelectionOption]) -> String {
    selection
        .first()
        .map(|option| option.id.clone())
        .unwrap_or_default()
}

impl ExpressionTree {
    /// Appends a blank condition to the root.
    pub fn add_condition(&self) -> Self {
        let mut tree = self.clone();
        tree.conditions.push(Node::blank());
        debug!(len = tree.len(), "condition added");
        tree
    }

    /// Appends a blank condition to the group at `group_index`.
    pub fn add_sub_condition(&self, group_index: usize) -> Result<Self, EditError> {
        let mut tree = self.clone();
        let group = tree.group_mut(group_index)?;
        group.conditions.push(Condition::default());
        debug!(group = group_index, "sub-condition added");
        Ok(tree)
    }

    /// Removes the node at `index`. The last remaining node is replaced by a
    /// blank condition instead.
    pub fn delete_condition(&self, index: usize) -> Result<Self, EditError> {
        let mut tree = self.clone();
        tree.node_mut(index)?;
        if tree.len() > 1 {
            tree.conditions.remove(index);
        } else {
            tree.conditions[0] = Node::blank();
        }
        debug!(index, len = tree.len(), "condition deleted");
        Ok(tree)
    }

    /// Removes one condition from a group. A group left without conditions is
    /// removed from the root altogether.
    pub fn delete_sub_condition(
        &self,
        group_index: usize,
        sub_index: usize,
    ) -> Result<Self, EditError> {
        let mut tree = self.clone();
        let group = tree.group_mut(group_index)?;
        let len = group.conditions.len();
        if sub_index >= len {
            return Err(EditError::InvalidIndex {
                index: sub_index,
                len,
            });
        }

        if len > 1 {
            group.conditions.remove(sub_index);
            debug!(group = group_index, index = sub_index, "sub-condition deleted");
        } else {
            tree.conditions.remove(group_index);
            if tree.conditions.is_empty() {
                tree.conditions.push(Node::blank());
            }
            debug!(group = group_index, "last sub-condition deleted, group removed");
        }
        Ok(tree)
    }

    /// Appends a new `all` group holding one blank condition.
    pub fn add_group(&self) -> Self {
        let mut tree = self.clone();
        tree.conditions.push(Node::Group(Group::new()));
        debug!(len = tree.len(), "group added");
        tree
    }

    /// Updates one field of the root-level condition at `index`.
    pub fn update_field(&self, index: usize, update: &ConditionUpdate) -> Result<Self, EditError> {
        let mut tree = self.clone();
        update.apply(tree.condition_mut(index)?);
        Ok(tree)
    }

    /// Updates one field of a condition inside the group at `group_index`.
    pub fn update_sub_field(
        &self,
        group_index: usize,
        sub_index: usize,
        update: &ConditionUpdate,
    ) -> Result<Self, EditError> {
        let mut tree = self.clone();
        let group = tree.group_mut(group_index)?;
        let len = group.conditions.len();
        let condition = group
            .conditions
            .get_mut(sub_index)
            .ok_or(EditError::InvalidIndex {
                index: sub_index,
                len,
            })?;
        update.apply(condition);
        Ok(tree)
    }

    pub fn update_group_field(
        &self,
        group_index: usize,
        update: &GroupUpdate,
    ) -> Result<Self, EditError> {
        let mut tree = self.clone();
        let group = tree.group_mut(group_index)?;
        match update {
            GroupUpdate::TriggerType(trigger) => group.trigger_type = *trigger,
            GroupUpdate::CustomLogic(text) => group.custom_logic = text.clone(),
        }
        Ok(tree)
    }

    pub fn with_trigger_type(&self, trigger_type: TriggerType) -> Self {
        Self {
            trigger_type,
            ..self.clone()
        }
    }

    pub fn with_custom_logic(&self, custom_logic: impl Into<String>) -> Self {
        Self {
            custom_logic: custom_logic.into(),
            ..self.clone()
        }
    }

    pub fn with_formula(&self, formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            ..self.clone()
        }
    }

    fn node_mut(&mut self, index: usize) -> Result<&mut Node, EditError> {
        let len = self.conditions.len();
        self.conditions
            .get_mut(index)
            .ok_or(EditError::InvalidIndex { index, len })
    }

    fn group_mut(&mut self, index: usize) -> Result<&mut Group, EditError> {
        match self.node_mut(index)? {
            Node::Group(group) => Ok(group),
            Node::Condition(_) => Err(EditError::TypeMismatch {
                index,
                expected: NodeKind::Group,
                found: NodeKind::Condition,
            }),
        }
    }

    fn condition_mut(&mut self, index: usize) -> Result<&mut Condition, EditError> {
        match self.node_mut(index)? {
            Node::Condition(condition) => Ok(condition),
            Node::Group(_) => Err(EditError::TypeMismatch {
                index,
                expected: NodeKind::Condition,
                found: NodeKind::Group,
            }),
        }
    }
}
