//! # Motif - Color Model and Condition Expression Engine
//!
//! **Motif** holds the state logic behind two form widgets of a design system: a
//! color picker and a condition expression builder. Hosts render the widgets;
//! Motif owns the data and every transition on it.
//!
//! ## Color
//!
//! The [`color`] module reconciles partial edits from any input surface (a hex
//! field, RGB or HSV spinners, a named color, a grid click, arrow keys) into one
//! consistent [`color::Color`]. Invalid input never fails: the offending field is
//! flagged in `errors` and keeps its previous value. [`color::ColorPicker`] wraps
//! the engine in a picker session with a committed value and a working color.
//!
//! ## Expressions
//!
//! The [`expression`] module edits a tree of `resource operator value` conditions.
//! The root holds conditions and groups; groups hold conditions only. Every edit
//! returns a new tree, so a host keeps exactly one slot of state, typically
//! through [`expression::ExpressionEditor`].
//!
//! ## Quick Start
//!
//! ```rust
//! use motif::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Colors: a partial update resolved against the previous color.
//!     let engine = ColorEngine::new();
//!     let teal = engine.from_fields(&ColorFields::hex("#008080"), None);
//!     let lighter = engine.apply_delta(&ColorDelta::of(HsvComponent::Value, 20), &teal);
//!     assert!(!lighter.has_errors());
//!
//!     // Expressions: events from the host applied to a single tree.
//!     let mut editor = ExpressionEditor::default();
//!     editor.dispatch(&ExpressionEvent::AddGroup)?;
//!     editor.dispatch(&ExpressionEvent::ChangeValue {
//!         path: NodePath::Sub { group: 1, index: 0 },
//!         value: "42".to_string(),
//!     })?;
//!     assert_eq!(editor.tree().describe(), "1 AND (2.1)");
//!
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod error;
pub mod expression;
pub mod prelude;
