//! Conversion between `ExpressionTree` and the host's wire shape.
//!
//! Hosts describe trees the way their components consume them: a flat object per
//! row with an `isGroup` flag, camelCase keys and omitted blanks. These raw structs
//! mirror that shape and are only used at the serde boundary.

use super::node::{Condition, ExpressionTree, Group, Node, TriggerType};
use crate::error::ConversionError;
use serde::{Deserialize, Serialize};

/// Condition rows carry only `resource`, `operator` and `value`; group rows
/// carry only `isGroup`, `triggerType`, `customLogic` and `conditions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNode {
    #[serde(default, skip_serializing_if = "is_false")]
    is_group: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trigger_type: Option<TriggerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_logic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    conditions: Option<Vec<RawNode>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTree {
    #[serde(default)]
    trigger_type: TriggerType,
    #[serde(default)]
    custom_logic: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    formula: String,
    #[serde(default)]
    conditions: Vec<RawNode>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl RawNode {
    fn into_condition(self) -> Result<Condition, ConversionError> {
        if self.is_group {
            return Err(ConversionError::NestedGroup);
        }
        Ok(Condition {
            resource: self.resource.unwrap_or_default(),
            operator: self.operator.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
        })
    }
}

impl TryFrom<RawNode> for Node {
    type Error = ConversionError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        if !raw.is_group {
            return raw.into_condition().map(Node::Condition);
        }

        let mut conditions = raw
            .conditions
            .unwrap_or_default()
            .into_iter()
            .map(RawNode::into_condition)
            .collect::<Result<Vec<_>, _>>()?;
        if conditions.is_empty() {
            conditions.push(Condition::default());
        }

        Ok(Node::Group(Group {
            trigger_type: raw.trigger_type.unwrap_or_default(),
            custom_logic: raw.custom_logic.unwrap_or_default(),
            conditions,
        }))
    }
}

impl From<Condition> for RawNode {
    fn from(condition: Condition) -> Self {
        RawNode {
            resource: Some(condition.resource),
            operator: Some(condition.operator),
            value: Some(condition.value),
            ..RawNode::default()
        }
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Condition(condition) => condition.into(),
            Node::Group(group) => RawNode {
                is_group: true,
                trigger_type: Some(group.trigger_type),
                custom_logic: Some(group.custom_logic),
                conditions: Some(group.conditions.into_iter().map(RawNode::from).collect()),
                ..RawNode::default()
            },
        }
    }
}

impl TryFrom<RawTree> for ExpressionTree {
    type Error = ConversionError;

    fn try_from(raw: RawTree) -> Result<Self, Self::Error> {
        let conditions = raw
            .conditions
            .into_iter()
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let mut tree = ExpressionTree::new(raw.trigger_type, conditions);
        tree.custom_logic = raw.custom_logic;
        tree.formula = raw.formula;
        Ok(tree)
    }
}

impl From<ExpressionTree> for RawTree {
    fn from(tree: ExpressionTree) -> Self {
        RawTree {
            trigger_type: tree.trigger_type,
            custom_logic: tree.custom_logic,
            formula: tree.formula,
            conditions: tree.conditions.into_iter().map(RawNode::from).collect(),
        }
    }
}

/// A trait for host data models that can be converted into an `ExpressionTree`.
///
/// Hosts that keep their own representation of the condition list implement this
/// to hand the editor a tree without going through JSON.
pub trait IntoExpression {
    fn into_expression(self) -> Result<ExpressionTree, ConversionError>;
}

impl IntoExpression for serde_json::Value {
    fn into_expression(self) -> Result<ExpressionTree, ConversionError> {
        serde_json::from_value(self).map_err(|e| ConversionError::JsonParseError(e.to_string()))
    }
}

impl IntoExpression for ExpressionTree {
    fn into_expression(self) -> Result<ExpressionTree, ConversionError> {
        Ok(self)
    }
}

impl ExpressionTree {
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(json).map_err(|e| ConversionError::JsonParseError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConversionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConversionError::ValidationError(e.to_string()))
    }
}
