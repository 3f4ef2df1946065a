pub mod analysis;
pub mod chart_file;

pub use analysis::*;
pub use chart_file::*;
