//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need to drive a color picker or an
//! expression builder.
//!
//! # Example
//!
//! ```rust
//! use motif::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let tree = ExpressionTree::from_json(r#"{ "triggerType": "any", "conditions": [] }"#)?;
//! let tree = tree.add_condition();
//! assert_eq!(tree.describe(), "1 OR 2");
//! # Ok(())
//! # }
//! # run_example().unwrap();
//! ```

// Color model and picker
pub use crate::color::{
    Color, ColorDelta, ColorEngine, ColorFields, ColorPicker, HexValidator, HsvComponent,
    PickerConfig, hex_from_named_color, is_valid_hex,
};

// Expression tree and editing
pub use crate::expression::{
    Condition, ConditionUpdate, ExpressionEditor, ExpressionEvent, ExpressionTree, Group,
    GroupUpdate, IntoExpression, Node, NodePath, SelectionOption, TriggerType, connector_label,
};

// Error types
pub use crate::error::{ConversionError, EditError, PickerError, SnapshotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
