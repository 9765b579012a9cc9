use super::node::TriggerType;

/// The label shown in front of the condition at `position` within a list whose
/// trigger type is `trigger_type`.
///
/// Custom logic refers to conditions by number, so every row is numbered from 1.
/// `all` and `any` put their connector in front of every row but the first.
pub fn connector_label(position: usize, trigger_type: TriggerType) -> String {
    if trigger_type == TriggerType::Custom {
        return (position + 1).to_string();
    }
    if position == 0 {
        return String::new();
    }
    trigger_type.connector().unwrap_or_default().to_string()
}

/// Labels for every row of a list of `len` rows.
pub fn row_labels(len: usize, trigger_type: TriggerType) -> Vec<String> {
    (0..len)
        .map(|position| connector_label(position, trigger_type))
        .collect()
}
