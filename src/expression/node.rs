use super::interop::{RawNode, RawTree};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How sibling conditions combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    #[default]
    All,
    Any,
    Custom,
    Always,
    Formula,
}

impl TriggerType {
    /// Order of the options in the trigger selector.
    pub const SELECTOR_ORDER: [TriggerType; 5] = [
        TriggerType::All,
        TriggerType::Any,
        TriggerType::Custom,
        TriggerType::Always,
        TriggerType::Formula,
    ];

    /// Decodes a 1-based selector position.
    pub fn from_selector_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::SELECTOR_ORDER.get(i))
            .copied()
    }

    /// Decodes a selector selection, whose option ids are exactly `"1"`..`"5"`.
    pub fn from_selection(selection: &[SelectionOption]) -> Option<Self> {
        let id = selection.first()?.id.as_str();
        Self::SELECTOR_ORDER
            .iter()
            .copied()
            .find(|trigger| trigger.selector_position().to_string() == id)
    }

    pub fn selector_position(self) -> usize {
        match self {
            TriggerType::All => 1,
            TriggerType::Any => 2,
            TriggerType::Custom => 3,
            TriggerType::Always => 4,
            TriggerType::Formula => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TriggerType::All => "all",
            TriggerType::Any => "any",
            TriggerType::Custom => "custom",
            TriggerType::Always => "always",
            TriggerType::Formula => "formula",
        }
    }

    /// The word placed between conditions, for the trigger types that have one.
    pub fn connector(self) -> Option<&'static str> {
        match self {
            TriggerType::All => Some("AND"),
            TriggerType::Any => Some("OR"),
            TriggerType::Custom | TriggerType::Always | TriggerType::Formula => None,
        }
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One option picked in a single-select combobox.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionOption {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl SelectionOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A `resource operator value` row. Empty strings mean nothing selected yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub resource: String,
    pub operator: String,
    pub value: String,
}

impl Condition {
    pub fn new(
        resource: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            resource: resource.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn with_resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        self.resource.is_empty() && self.operator.is_empty() && self.value.is_empty()
    }
}

/// A nested set of conditions with its own trigger type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pub trigger_type: TriggerType,
    pub custom_logic: String,
    pub conditions: Vec<Condition>,
}

impl Group {
    /// A fresh group as created by "Add Group": `all`, one blank condition.
    pub fn new() -> Self {
        Self {
            trigger_type: TriggerType::All,
            custom_logic: String::new(),
            conditions: vec![Condition::default()],
        }
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Condition,
    Group,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Condition => f.write_str("condition"),
            NodeKind::Group => f.write_str("group"),
        }
    }
}

/// A root-level entry: either a plain condition or a group of conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum Node {
    Condition(Condition),
    Group(Group),
}

impl Node {
    pub fn blank() -> Self {
        Node::Condition(Condition::default())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Condition(_) => NodeKind::Condition,
            Node::Group(_) => NodeKind::Group,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Node::Condition(c) => Some(c),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            Node::Condition(_) => None,
        }
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

/// The root of an expression: an ordered list of nodes and the root trigger type.
///
/// The list is never empty; every edit that would empty it leaves one blank
/// condition behind instead. `formula` holds the text of the formula editor that
/// replaces the list when the root trigger is `formula`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTree", into = "RawTree")]
pub struct ExpressionTree {
    pub trigger_type: TriggerType,
    pub custom_logic: String,
    pub formula: String,
    pub conditions: Vec<Node>,
}

impl ExpressionTree {
    pub fn new(trigger_type: TriggerType, conditions: Vec<Node>) -> Self {
        let conditions = if conditions.is_empty() {
            vec![Node::blank()]
        } else {
            conditions
        };
        Self {
            trigger_type,
            custom_logic: String::new(),
            formula: String::new(),
            conditions,
        }
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Always false for trees built through this crate; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.conditions.get(index)
    }
}

impl Default for ExpressionTree {
    fn default() -> Self {
        Self::new(TriggerType::All, Vec::new())
    }
}
