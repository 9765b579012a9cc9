//! Binary snapshots of an `ExpressionTree`.
//!
//! Snapshots use their own positional layout rather than the host JSON shape,
//! which omits absent fields and so cannot be read back by a non-self-describing
//! format.

use super::node::{Condition, ExpressionTree, Group, Node, TriggerType};
use crate::error::SnapshotError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

#[derive(Serialize, Deserialize)]
struct SnapshotTree {
    trigger_type: TriggerType,
    custom_logic: String,
    formula: String,
    conditions: Vec<SnapshotNode>,
}

#[derive(Serialize, Deserialize)]
enum SnapshotNode {
    Condition(Condition),
    Group {
        trigger_type: TriggerType,
        custom_logic: String,
        conditions: Vec<Condition>,
    },
}

impl From<&ExpressionTree> for SnapshotTree {
    fn from(tree: &ExpressionTree) -> Self {
        let conditions = tree
            .conditions
            .iter()
            .map(|node| match node {
                Node::Condition(condition) => SnapshotNode::Condition(condition.clone()),
                Node::Group(group) => SnapshotNode::Group {
                    trigger_type: group.trigger_type,
                    custom_logic: group.custom_logic.clone(),
                    conditions: group.conditions.clone(),
                },
            })
            .collect();
        SnapshotTree {
            trigger_type: tree.trigger_type,
            custom_logic: tree.custom_logic.clone(),
            formula: tree.formula.clone(),
            conditions,
        }
    }
}

impl From<SnapshotTree> for ExpressionTree {
    fn from(snapshot: SnapshotTree) -> Self {
        let conditions = snapshot
            .conditions
            .into_iter()
            .map(|node| match node {
                SnapshotNode::Condition(condition) => Node::Condition(condition),
                SnapshotNode::Group {
                    trigger_type,
                    custom_logic,
                    mut conditions,
                } => {
                    if conditions.is_empty() {
                        conditions.push(Condition::default());
                    }
                    Node::Group(Group {
                        trigger_type,
                        custom_logic,
                        conditions,
                    })
                }
            })
            .collect();
        let mut tree = ExpressionTree::new(snapshot.trigger_type, conditions);
        tree.custom_logic = snapshot.custom_logic;
        tree.formula = snapshot.formula;
        tree
    }
}

impl ExpressionTree {
    /// Encodes the tree in the compact binary snapshot format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(encode_to_vec(SnapshotTree::from(self), standard())?)
    }

    /// Decodes a tree from a snapshot byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice::<SnapshotTree, _>(bytes, standard())
            .map(|(snapshot, _)| snapshot.into()) // bincode 2 returns (data, bytes_read)
            .map_err(SnapshotError::from)
    }

    /// Saves the tree to a snapshot file.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let io_error = |source| SnapshotError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::create(path).map_err(io_error)?;
        file.write_all(&bytes).map_err(io_error)?;
        Ok(())
    }

    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let io_error = |source| SnapshotError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::open(path).map_err(io_error)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_error)?;
        Self::from_bytes(&bytes)
    }
}
