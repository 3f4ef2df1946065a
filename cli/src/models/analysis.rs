use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::vision::VisionError;

/// Prefix shown in place of an analysis when the model call failed
pub const ANALYSIS_ERROR_PREFIX: &str = "分析圖片時發生錯誤：";

/// Table shape requested from the model in batch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchLayout {
    /// `代號 | 相對位置 | 預估價格`
    Position,
    /// `檔名 | 代號 | 時間區間 | 趨勢`
    #[default]
    Trend,
}

impl BatchLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchLayout::Position => "position",
            BatchLayout::Trend => "trend",
        }
    }
}

impl fmt::Display for BatchLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "position" | "price" => Ok(BatchLayout::Position),
            "trend" => Ok(BatchLayout::Trend),
            other => Err(format!("unknown batch layout '{}', expected 'trend' or 'position'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// One chart, free-form six-part answer
    Single,
    /// Several charts, table-only answer
    Batch(BatchLayout),
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Single => "single",
            AnalysisMode::Batch(_) => "batch",
        }
    }
}

/// Outcome of one model call together with the files it covered
#[derive(Debug)]
pub struct AnalysisResult {
    pub outcome: Result<String, VisionError>,
    pub filenames: Vec<String>,
}

impl AnalysisResult {
    pub fn new(outcome: Result<String, VisionError>, filenames: Vec<String>) -> Self {
        Self { outcome, filenames }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Text to present to the user; errors keep the historical wording
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(text) => text.clone(),
            Err(e) => format!("{}{}", ANALYSIS_ERROR_PREFIX, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_parsing() {
        assert_eq!("trend".parse::<BatchLayout>().unwrap(), BatchLayout::Trend);
        assert_eq!(" Position ".parse::<BatchLayout>().unwrap(), BatchLayout::Position);
        assert!("table".parse::<BatchLayout>().is_err());
        assert_eq!(BatchLayout::default(), BatchLayout::Trend);
    }

    #[test]
    fn test_display_text_for_error() {
        let result = AnalysisResult::new(
            Err(VisionError::InvalidResponse("quota exceeded".to_string())),
            vec!["chart.png".to_string()],
        );
        assert!(!result.is_success());
        assert_eq!(
            result.display_text(),
            "分析圖片時發生錯誤：invalid response from vision model: quota exceeded"
        );
    }

    #[test]
    fn test_display_text_for_success() {
        let result = AnalysisResult::new(Ok("趨勢向上".to_string()), vec![]);
        assert!(result.is_success());
        assert_eq!(result.display_text(), "趨勢向上");
    }
}
