mod common;

use common::{selection, single_condition_tree, tree_with_group, tree_with_single_condition_group};
use motif::error::EditError;
use motif::expression::*;

#[test]
fn test_default_tree_has_one_blank_condition() {
    let tree = ExpressionTree::default();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(0), Some(&Node::blank()));
    assert_eq!(tree.trigger_type, TriggerType::All);

    let from_empty = ExpressionTree::new(TriggerType::Any, vec![]);
    assert_eq!(from_empty.len(), 1);
}

#[test]
fn test_add_condition_appends_blank() {
    let tree = single_condition_tree();
    let next = tree.add_condition();

    assert_eq!(next.len(), 2);
    assert_eq!(next.get(0), tree.get(0));
    assert_eq!(next.get(1), Some(&Node::blank()));
    // The input tree is untouched.
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_add_group_appends_fresh_group() {
    let tree = single_condition_tree().add_group();
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.trigger_type, TriggerType::All);
    assert_eq!(group.custom_logic, "");
    assert_eq!(group.conditions, vec![Condition::default()]);
}

#[test]
fn test_add_sub_condition() {
    let tree = tree_with_group().add_sub_condition(1).unwrap();
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.conditions.len(), 3);
    assert!(group.conditions[2].is_blank());
}

#[test]
fn test_add_sub_condition_errors() {
    let tree = tree_with_group();
    assert_eq!(
        tree.add_sub_condition(0),
        Err(EditError::TypeMismatch {
            index: 0,
            expected: NodeKind::Group,
            found: NodeKind::Condition,
        })
    );
    assert_eq!(
        tree.add_sub_condition(5),
        Err(EditError::InvalidIndex { index: 5, len: 2 })
    );
}

#[test]
fn test_repeated_delete_converges_to_single_blank() {
    let mut tree = tree_with_group().add_condition().add_group();
    for _ in 0..10 {
        tree = tree.delete_condition(0).unwrap();
        assert!(tree.len() >= 1);
    }
    assert_eq!(tree, ExpressionTree::default());
}

#[test]
fn test_delete_only_condition_resets_it() {
    let tree = single_condition_tree().delete_condition(0).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(0), Some(&Node::blank()));
}

#[test]
fn test_delete_condition_out_of_bounds() {
    assert_eq!(
        single_condition_tree().delete_condition(1),
        Err(EditError::InvalidIndex { index: 1, len: 1 })
    );
}

#[test]
fn test_delete_sub_condition_keeps_group_with_others() {
    let tree = tree_with_group().delete_sub_condition(1, 0).unwrap();
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.conditions, vec![Condition::new("humidity", "eq", "40")]);
}

#[test]
fn test_deleting_last_sub_condition_removes_group() {
    let tree = tree_with_single_condition_group()
        .delete_sub_condition(1, 0)
        .unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(0).map(Node::kind), Some(NodeKind::Condition));
}

#[test]
fn test_deleting_only_group_leaves_blank_root() {
    let tree = ExpressionTree::new(TriggerType::All, vec![Node::Group(Group::new())]);
    let tree = tree.delete_sub_condition(0, 0).unwrap();
    assert_eq!(tree, ExpressionTree::default());
}

#[test]
fn test_delete_sub_condition_errors() {
    let tree = tree_with_group();
    assert!(matches!(
        tree.delete_sub_condition(0, 0),
        Err(EditError::TypeMismatch { index: 0, .. })
    ));
    assert_eq!(
        tree.delete_sub_condition(1, 2),
        Err(EditError::InvalidIndex { index: 2, len: 2 })
    );
}

#[test]
fn test_update_field() {
    let tree = single_condition_tree();
    let tree = tree
        .update_field(0, &ConditionUpdate::Operator(selection("gte")))
        .unwrap()
        .update_field(0, &ConditionUpdate::Value("10".to_string()))
        .unwrap();
    assert_eq!(
        tree.get(0).and_then(Node::as_condition),
        Some(&Condition::new("111", "gte", "10"))
    );

    let cleared = tree
        .update_field(0, &ConditionUpdate::Resource(vec![]))
        .unwrap();
    assert_eq!(cleared.get(0).and_then(Node::as_condition).unwrap().resource, "");
}

#[test]
fn test_update_field_on_group_is_type_mismatch() {
    let result = tree_with_group().update_field(1, &ConditionUpdate::Value("x".into()));
    assert_eq!(
        result,
        Err(EditError::TypeMismatch {
            index: 1,
            expected: NodeKind::Condition,
            found: NodeKind::Group,
        })
    );
}

#[test]
fn test_update_sub_field() {
    let tree = tree_with_group()
        .update_sub_field(1, 1, &ConditionUpdate::Resource(selection("wind")))
        .unwrap();
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.conditions[1].resource, "wind");
    assert_eq!(group.conditions[0].resource, "pressure");

    assert_eq!(
        tree.update_sub_field(1, 9, &ConditionUpdate::Value(String::new())),
        Err(EditError::InvalidIndex { index: 9, len: 2 })
    );
}

#[test]
fn test_update_group_field() {
    let tree = tree_with_group()
        .update_group_field(1, &GroupUpdate::TriggerType(TriggerType::Custom))
        .unwrap()
        .update_group_field(1, &GroupUpdate::CustomLogic("1 AND NOT 2".into()))
        .unwrap();
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.trigger_type, TriggerType::Custom);
    assert_eq!(group.custom_logic, "1 AND NOT 2");
}

#[test]
fn test_root_updates() {
    let tree = single_condition_tree()
        .with_trigger_type(TriggerType::Custom)
        .with_custom_logic("1");
    assert_eq!(tree.trigger_type, TriggerType::Custom);
    assert_eq!(tree.custom_logic, "1");
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_trigger_decoding() {
    let expected = [
        TriggerType::All,
        TriggerType::Any,
        TriggerType::Custom,
        TriggerType::Always,
        TriggerType::Formula,
    ];
    for (i, trigger) in expected.into_iter().enumerate() {
        assert_eq!(TriggerType::from_selector_position(i + 1), Some(trigger));
        assert_eq!(trigger.selector_position(), i + 1);
    }
    assert_eq!(TriggerType::from_selector_position(0), None);
    assert_eq!(TriggerType::from_selector_position(6), None);

    assert_eq!(TriggerType::from_selection(&selection("2")), Some(TriggerType::Any));
    assert_eq!(TriggerType::from_selection(&selection("all")), None);
    assert_eq!(TriggerType::from_selection(&[]), None);

    // Ids match exactly; padded or zero-prefixed ids are not positions.
    for id in ["01", " 1", "1 ", "+1", "05", ""] {
        assert_eq!(TriggerType::from_selection(&selection(id)), None, "{id:?}");
    }
}

#[test]
fn test_connector_labels() {
    assert_eq!(connector_label(1, TriggerType::All), "AND");
    assert_eq!(connector_label(0, TriggerType::All), "");
    assert_eq!(connector_label(3, TriggerType::Any), "OR");
    assert_eq!(connector_label(2, TriggerType::Custom), "3");
    assert_eq!(connector_label(0, TriggerType::Custom), "1");
    assert_eq!(connector_label(1, TriggerType::Always), "");
    assert_eq!(connector_label(1, TriggerType::Formula), "");
    assert_eq!(row_labels(3, TriggerType::Any), vec!["", "OR", "OR"]);
}

#[test]
fn test_layout_rules() {
    let all = GroupLayout::of(TriggerType::All, true);
    assert!(all.show_conditions && all.show_add_condition && all.show_add_group);
    assert!(!all.show_custom_logic && !all.formula_replaces_list);

    let always = GroupLayout::of(TriggerType::Always, true);
    assert!(!always.show_conditions && !always.show_add_condition && !always.show_add_group);

    let custom = GroupLayout::of(TriggerType::Custom, false);
    assert!(custom.show_custom_logic && custom.show_conditions && !custom.show_add_group);

    let root_formula = GroupLayout::of(TriggerType::Formula, true);
    assert!(root_formula.formula_replaces_list && !root_formula.show_conditions);
    assert!(!root_formula.show_add_condition);

    let group_formula = GroupLayout::of(TriggerType::Formula, false);
    assert!(group_formula.show_conditions && !group_formula.formula_replaces_list);
    assert!(!group_formula.show_add_condition);

    assert_eq!(tree_with_group().layout(), GroupLayout::of(TriggerType::All, true));
}

#[test]
fn test_row_inputs_wait_for_resource() {
    let blank = Condition::default();
    assert!(!blank.operator_enabled() && !blank.value_enabled());
    let chosen = Condition::with_resource("111");
    assert!(chosen.operator_enabled() && chosen.value_enabled());
}

#[test]
fn test_describe() {
    assert_eq!(tree_with_group().describe(), "1 AND (2.1 OR 2.2)");
    assert_eq!(ExpressionTree::default().describe(), "1");

    let custom = tree_with_group()
        .with_trigger_type(TriggerType::Custom)
        .with_custom_logic("1 OR 2");
    assert_eq!(custom.describe(), "1 OR 2");

    let always = tree_with_group().with_trigger_type(TriggerType::Always);
    assert_eq!(always.describe(), "ALWAYS");

    let nested_formula = tree_with_group()
        .update_group_field(1, &GroupUpdate::TriggerType(TriggerType::Formula))
        .unwrap();
    assert_eq!(nested_formula.describe(), "1 AND (FORMULA)");

    let empty_formula = tree_with_group().with_trigger_type(TriggerType::Formula);
    assert_eq!(empty_formula.describe(), "FORMULA");
    let formula = empty_formula.with_formula("  pressure * 2 > 5 ");
    assert_eq!(formula.describe(), "pressure * 2 > 5");

    // The formula text only describes the tree while the formula trigger is selected.
    assert_eq!(formula.with_trigger_type(TriggerType::All).describe(), "1 AND (2.1 OR 2.2)");
}

#[test]
fn test_display_tree() {
    let rendered = tree_with_group().display().to_string();
    assert!(rendered.starts_with("[all]\n"));
    assert!(rendered.contains("1. temperature gt 25"));
    assert!(rendered.contains("2. group [any]"));
    assert!(rendered.contains("2.2. humidity eq 40"));
}

#[test]
fn test_events_dispatch_through_editor() {
    let mut editor = ExpressionEditor::new(single_condition_tree());
    editor.dispatch(&ExpressionEvent::AddGroup).unwrap();
    editor
        .dispatch(&ExpressionEvent::AddCondition { group: Some(1) })
        .unwrap();
    editor
        .dispatch(&ExpressionEvent::ChangeResource {
            path: NodePath::Sub { group: 1, index: 1 },
            selection: selection("222"),
        })
        .unwrap();
    editor
        .dispatch(&ExpressionEvent::ChangeTrigger {
            group: Some(1),
            selection: selection("2"),
        })
        .unwrap();
    let tree = editor
        .dispatch(&ExpressionEvent::ChangeValue {
            path: NodePath::Root(0),
            value: "5".into(),
        })
        .unwrap();

    assert_eq!(tree.describe(), "1 AND (2.1 OR 2.2)");
    let group = tree.get(1).and_then(Node::as_group).unwrap();
    assert_eq!(group.conditions[1].resource, "222");
    assert_eq!(tree.get(0).and_then(Node::as_condition).unwrap().value, "5");
}

#[test]
fn test_failed_dispatch_leaves_tree_untouched() {
    let mut editor = ExpressionEditor::new(tree_with_group());
    let before = editor.tree().clone();
    let result = editor.dispatch(&ExpressionEvent::Delete {
        path: NodePath::Sub { group: 0, index: 0 },
    });
    assert!(result.is_err());
    assert_eq!(editor.tree(), &before);
}

#[test]
fn test_undecodable_trigger_selection_is_ignored() {
    let tree = tree_with_group();
    let next = tree
        .apply(&ExpressionEvent::ChangeTrigger {
            group: None,
            selection: vec![],
        })
        .unwrap();
    assert_eq!(next, tree);

    let next = tree
        .apply(&ExpressionEvent::ChangeTrigger {
            group: None,
            selection: selection("4"),
        })
        .unwrap();
    assert_eq!(next.trigger_type, TriggerType::Always);
}

#[test]
fn test_custom_logic_event() {
    let tree = tree_with_group()
        .apply(&ExpressionEvent::ChangeCustomLogic {
            group: None,
            value: "1 AND 2".into(),
        })
        .unwrap()
        .apply(&ExpressionEvent::ChangeCustomLogic {
            group: Some(1),
            value: "1".into(),
        })
        .unwrap();
    assert_eq!(tree.custom_logic, "1 AND 2");
    assert_eq!(tree.get(1).and_then(Node::as_group).unwrap().custom_logic, "1");
}

#[test]
fn test_formula_event_edits_root_formula() {
    let mut editor = ExpressionEditor::new(tree_with_group());
    editor
        .dispatch(&ExpressionEvent::ChangeTrigger {
            group: None,
            selection: selection("5"),
        })
        .unwrap();
    let tree = editor
        .dispatch(&ExpressionEvent::ChangeFormula {
            value: "temperature / 2".into(),
        })
        .unwrap();

    assert_eq!(tree.trigger_type, TriggerType::Formula);
    assert_eq!(tree.formula, "temperature / 2");
    assert_eq!(tree.custom_logic, "");
    assert_eq!(tree.conditions, tree_with_group().conditions);
    assert_eq!(ExpressionTree::default().formula, "");
}
