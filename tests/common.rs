//! Common test utilities for building trees, colors and pickers.
use motif::color::{Color, ColorEngine, ColorFields, ColorPicker, PickerConfig};
use motif::expression::{Condition, ExpressionTree, Group, Node, SelectionOption, TriggerType};

/// `[ {resource: "111"} ]` at the root, trigger `all`.
#[allow(dead_code)]
pub fn single_condition_tree() -> ExpressionTree {
    ExpressionTree::new(
        TriggerType::All,
        vec![Node::Condition(Condition::with_resource("111"))],
    )
}

/// A root condition followed by an `any` group with two conditions.
///
/// Logic: `1 AND (2.1 OR 2.2)`
#[allow(dead_code)]
pub fn tree_with_group() -> ExpressionTree {
    ExpressionTree::new(
        TriggerType::All,
        vec![
            Node::Condition(Condition::new("temperature", "gt", "25")),
            Node::Group(Group {
                trigger_type: TriggerType::Any,
                custom_logic: String::new(),
                conditions: vec![
                    Condition::new("pressure", "lt", "3"),
                    Condition::new("humidity", "eq", "40"),
                ],
            }),
        ],
    )
}

/// A group holding a single condition at index 1.
#[allow(dead_code)]
pub fn tree_with_single_condition_group() -> ExpressionTree {
    ExpressionTree::new(
        TriggerType::Any,
        vec![
            Node::Condition(Condition::with_resource("111")),
            Node::Group(Group {
                trigger_type: TriggerType::All,
                custom_logic: String::new(),
                conditions: vec![Condition::with_resource("222")],
            }),
        ],
    )
}

#[allow(dead_code)]
pub fn selection(id: &str) -> Vec<SelectionOption> {
    vec![SelectionOption::new(id, format!("Option {id}"))]
}

/// Resolves a hex string with the default engine.
#[allow(dead_code)]
pub fn color(hex: &str) -> Color {
    ColorEngine::new().from_fields(&ColorFields::hex(hex), None)
}

/// A closed picker with the default palette, committed to `value`.
#[allow(dead_code)]
pub fn picker(value: &str) -> ColorPicker {
    ColorPicker::new(PickerConfig::default(), value, None)
}

/// Shortest distance between two hues on the color wheel.
#[allow(dead_code)]
pub fn hue_distance(a: u16, b: u16) -> u16 {
    let d = a.abs_diff(b) % 360;
    d.min(360 - d)
}
