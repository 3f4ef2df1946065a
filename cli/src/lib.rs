//! # klinereader - Candlestick Chart Reading Library
//!
//! Building blocks for asking a generative vision model to read K-line charts:
//! - Filename metadata parsing (`NVDA_3h.png` -> symbol `NVDA`, range `3h`)
//! - Report date extraction from filenames
//! - Traditional-Chinese prompt templates for single and batch analysis
//! - A Gemini `generateContent` client behind the [`vision::VisionModel`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use klinereader::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let files = ["NVDA_3h.png", "TSM_day.png"];
//!     let prompt = build_prompt(AnalysisMode::Batch(BatchLayout::Trend), &files);
//!
//!     let client = GeminiClient::new(GeminiConfig::from_env())?;
//!     let mut images = Vec::new();
//!     for file in files {
//!         images.push(ImagePayload::load(std::path::Path::new(file), file).await?);
//!     }
//!     let answer = client.generate(&prompt, &images).await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod utils;
pub mod vision;

/// Prompt generation for chart analysis
pub mod ask_ai;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```rust
    //! use klinereader::prelude::*;
    //! ```

    pub use crate::ask_ai::{build_batch_prompt, build_prompt, build_single_chart_prompt};
    pub use crate::models::{
        is_allowed_image, AnalysisMode, AnalysisResult, BatchLayout, ChartFileInfo,
        ALLOWED_EXTENSIONS, ANALYSIS_ERROR_PREFIX,
    };
    pub use crate::utils::{extract_report_date, parse_date_from_filename};
    pub use crate::vision::{GeminiClient, GeminiConfig, ImagePayload, VisionError, VisionModel};
}

// Re-export some commonly used utilities
pub use utils::{init_logger, Timer};
