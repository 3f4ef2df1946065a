use crate::models::{AnalysisMode, BatchLayout};
use super::formatters::format_manifest;
use super::templates::{batch_template_id, get_template_by_id, SINGLE_ANALYSIS_ID};
use super::types::{AskAITemplate, ChartContextData};

fn template_prompt(id: &str) -> String {
    get_template_by_id(id)
        .map(|AskAITemplate { prompt, .. }| prompt)
        .unwrap_or_default()
}

/// Prompt for one chart: the filename followed by the six-part instruction
pub fn build_single_chart_prompt(filename: &str) -> String {
    format!("# 圖片檔名\n{}\n\n{}", filename, template_prompt(SINGLE_ANALYSIS_ID))
}

/// Prompt for several charts: manifest, then the table-only instruction for `layout`
pub fn build_batch_prompt<S: AsRef<str>>(filenames: &[S], layout: BatchLayout) -> String {
    let charts = ChartContextData::from_filenames(filenames);
    format!(
        "以下是本次上傳的K線圖，圖片的順序與清單相同。\n\n{}\n\n{}",
        format_manifest(&charts, layout),
        template_prompt(batch_template_id(layout))
    )
}

/// Prompt for any analysis mode
pub fn build_prompt<S: AsRef<str>>(mode: AnalysisMode, filenames: &[S]) -> String {
    match mode {
        AnalysisMode::Single => {
            let filename = filenames.first().map(|f| f.as_ref()).unwrap_or_default();
            build_single_chart_prompt(filename)
        }
        AnalysisMode::Batch(layout) => build_batch_prompt(filenames, layout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prompt_is_keyed_to_filename() {
        let prompt = build_single_chart_prompt("chart.png");
        assert!(prompt.starts_with("# 圖片檔名\nchart.png\n\n"));
        assert!(prompt.contains("6. 可能的交易建議或風險提醒"));
    }

    #[test]
    fn test_trend_batch_prompt_lists_every_chart() {
        let prompt = build_batch_prompt(&["NVDA_3h.png", "TSM_day.png"], BatchLayout::Trend);
        assert!(prompt.contains("1. 檔名：NVDA_3h.png，代號：NVDA，時間區間：3h"));
        assert!(prompt.contains("2. 檔名：TSM_day.png，代號：TSM，時間區間：1d"));
        assert!(prompt.contains("| 檔名 | 代號 | 時間區間 | 趨勢 |"));
    }

    #[test]
    fn test_position_batch_prompt() {
        let prompt = build_prompt(AnalysisMode::Batch(BatchLayout::Position), &["2330.png"]);
        assert!(prompt.contains("推測代號：2330"));
        assert!(prompt.contains("| 代號 | 相對位置 | 預估價格 |"));
    }

    #[test]
    fn test_single_mode_without_files_still_builds() {
        let empty: [&str; 0] = [];
        let prompt = build_prompt(AnalysisMode::Single, &empty);
        assert!(prompt.contains("請分析這張K線圖"));
    }
}
