pub mod describe;
pub mod editor;
pub mod events;
pub mod interop;
pub mod label;
pub mod layout;
pub mod node;
pub mod snapshot;

pub use describe::DisplayTree;
pub use editor::{ConditionUpdate, GroupUpdate};
pub use events::{ExpressionEditor, ExpressionEvent, NodePath};
pub use interop::IntoExpression;
pub use label::{connector_label, row_labels};
pub use layout::GroupLayout;
pub use node::*;
