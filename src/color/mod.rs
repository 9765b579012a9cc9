pub mod conversion;
pub mod engine;
pub mod model;
pub mod named;
pub mod picker;
pub mod swatch;

pub use conversion::*;
pub use engine::*;
pub use model::*;
pub use named::*;
pub use picker::*;
pub use swatch::*;
