use super::node::{Condition, ExpressionTree, Node, TriggerType};
use itertools::Itertools;
use std::fmt;

impl ExpressionTree {
    /// Renders the logic of the tree on one line, e.g. `1 AND (2.1 OR 2.2)`.
    ///
    /// Conditions are named by their position; conditions inside a group are
    /// prefixed with the group's position.
    pub fn describe(&self) -> String {
        let terms = self
            .conditions
            .iter()
            .enumerate()
            .map(|(i, node)| match node {
                Node::Condition(_) => (i + 1).to_string(),
                Node::Group(group) => {
                    let inner = group
                        .conditions
                        .iter()
                        .enumerate()
                        .map(|(j, _)| format!("{}.{}", i + 1, j + 1));
                    format!("({})", combine(group.trigger_type, &group.custom_logic, inner))
                }
            });
        if self.trigger_type == TriggerType::Formula && !self.formula.trim().is_empty() {
            return self.formula.trim().to_string();
        }
        combine(self.trigger_type, &self.custom_logic, terms)
    }

    /// An indented, multi-line view of the tree for terminals and logs.
    pub fn display(&self) -> DisplayTree<'_> {
        DisplayTree { tree: self }
    }
}

fn combine(
    trigger_type: TriggerType,
    custom_logic: &str,
    mut terms: impl Iterator<Item = String>,
) -> String {
    match trigger_type {
        TriggerType::All | TriggerType::Any => {
            let connector = trigger_type.connector().unwrap_or_default();
            terms.join(&format!(" {connector} "))
        }
        TriggerType::Custom => custom_logic.trim().to_string(),
        TriggerType::Always => "ALWAYS".to_string(),
        TriggerType::Formula => "FORMULA".to_string(),
    }
}

pub struct DisplayTree<'a> {
    tree: &'a ExpressionTree,
}

impl<'a> fmt::Display for DisplayTree<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", header(self.tree.trigger_type, &self.tree.custom_logic))?;
        let last = self.tree.conditions.len().saturating_sub(1);
        for (i, node) in self.tree.conditions.iter().enumerate() {
            let (branch, child_prefix) = if i == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            match node {
                Node::Condition(condition) => {
                    writeln!(f, "{branch}{}. {}", i + 1, row(condition))?;
                }
                Node::Group(group) => {
                    writeln!(
                        f,
                        "{branch}{}. group {}",
                        i + 1,
                        header(group.trigger_type, &group.custom_logic)
                    )?;
                    let sub_last = group.conditions.len().saturating_sub(1);
                    for (j, condition) in group.conditions.iter().enumerate() {
                        let sub_branch = if j == sub_last { "└── " } else { "├── " };
                        writeln!(
                            f,
                            "{child_prefix}{sub_branch}{}.{}. {}",
                            i + 1,
                            j + 1,
                            row(condition)
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn header(trigger_type: TriggerType, custom_logic: &str) -> String {
    match trigger_type {
        TriggerType::Custom => format!("[custom: {}]", custom_logic.trim()),
        other => format!("[{other}]"),
    }
}

fn row(condition: &Condition) -> String {
    if condition.is_blank() {
        return "(blank)".to_string();
    }
    [&condition.resource, &condition.operator, &condition.value]
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(" ")
}
