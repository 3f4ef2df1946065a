use crate::models::BatchLayout;
use super::types::ChartContextData;

/// One manifest line for a chart in batch mode
pub fn format_chart_line(chart: &ChartContextData, layout: BatchLayout) -> String {
    match layout {
        BatchLayout::Position => format!(
            "{}. 檔名：{}，推測代號：{}",
            chart.index, chart.info.filename, chart.info.symbol
        ),
        BatchLayout::Trend => format!(
            "{}. 檔名：{}，代號：{}，時間區間：{}",
            chart.index,
            chart.info.filename,
            chart.info.symbol,
            chart.info.time_range_or_dash()
        ),
    }
}

/// Numbered list of every uploaded chart, in upload order
pub fn format_manifest(charts: &[ChartContextData], layout: BatchLayout) -> String {
    let lines: Vec<String> = charts
        .iter()
        .map(|chart| format_chart_line(chart, layout))
        .collect();

    format!("# 圖片清單（共 {} 張）\n{}", charts.len(), lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_manifest() {
        let charts = ChartContextData::from_filenames(&["NVDA_3h.png", "TSM_day.png"]);
        let manifest = format_manifest(&charts, BatchLayout::Trend);
        assert_eq!(
            manifest,
            "# 圖片清單（共 2 張）\n\
1. 檔名：NVDA_3h.png，代號：NVDA，時間區間：3h\n\
2. 檔名：TSM_day.png，代號：TSM，時間區間：1d"
        );
    }

    #[test]
    fn test_trend_manifest_ignores_dates_in_names() {
        let charts = ChartContextData::from_filenames(&["NVDA_day_20250102.png", "2330_week_20250102.jpg"]);
        let manifest = format_manifest(&charts, BatchLayout::Trend);
        assert!(manifest.contains("1. 檔名：NVDA_day_20250102.png，代號：NVDA，時間區間：1d"));
        assert!(manifest.contains("2. 檔名：2330_week_20250102.jpg，代號：2330，時間區間：1w"));
    }

    #[test]
    fn test_position_manifest_uses_symbol_guess() {
        let charts = ChartContextData::from_filenames(&["chart.png"]);
        assert_eq!(
            format_chart_line(&charts[0], BatchLayout::Position),
            "1. 檔名：chart.png，推測代號：chart"
        );
    }
}
