use super::node::{Condition, Group, TriggerType};
use serde::Serialize;

/// Which parts of a condition list a host should render for a trigger type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLayout {
    pub show_conditions: bool,
    pub show_custom_logic: bool,
    pub show_add_condition: bool,
    pub show_add_group: bool,
    /// At the root, `formula` swaps the condition list for a formula editor.
    pub formula_replaces_list: bool,
}

impl GroupLayout {
    pub fn of(trigger_type: TriggerType, is_root: bool) -> Self {
        let always = trigger_type == TriggerType::Always;
        let formula = trigger_type == TriggerType::Formula;
        let formula_replaces_list = is_root && formula;
        let show_buttons = !always && !formula;

        Self {
            show_conditions: !always && !formula_replaces_list,
            show_custom_logic: trigger_type == TriggerType::Custom,
            show_add_condition: show_buttons,
            show_add_group: show_buttons && is_root,
            formula_replaces_list,
        }
    }
}

impl Group {
    pub fn layout(&self) -> GroupLayout {
        GroupLayout::of(self.trigger_type, false)
    }
}

impl Condition {
    /// Operator and value inputs stay disabled until a resource is picked.
    pub fn operator_enabled(&self) -> bool {
        !self.resource.is_empty()
    }

    pub fn value_enabled(&self) -> bool {
        !self.resource.is_empty()
    }
}
