pub mod context_builders;
pub mod formatters;
pub mod templates;
pub mod types;

pub use context_builders::*;
pub use formatters::*;
pub use types::*;
