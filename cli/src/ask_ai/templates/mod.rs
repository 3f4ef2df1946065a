pub mod batch_zh;
pub mod single_zh;

use super::types::AskAITemplate;
use crate::models::BatchLayout;

pub use batch_zh::{BATCH_POSITION_ID, BATCH_TREND_ID};
pub use single_zh::SINGLE_ANALYSIS_ID;

pub fn get_single_chart_templates() -> Vec<AskAITemplate> {
    single_zh::get_single_chart_templates_zh()
}

pub fn get_batch_chart_templates() -> Vec<AskAITemplate> {
    batch_zh::get_batch_chart_templates_zh()
}

pub fn get_template_by_id(id: &str) -> Option<AskAITemplate> {
    let all_templates = [get_single_chart_templates(), get_batch_chart_templates()].concat();

    all_templates.into_iter().find(|template| template.id == id)
}

/// Template id used for a batch table layout
pub fn batch_template_id(layout: BatchLayout) -> &'static str {
    match layout {
        BatchLayout::Position => BATCH_POSITION_ID,
        BatchLayout::Trend => BATCH_TREND_ID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_reachable_by_id() {
        for id in [SINGLE_ANALYSIS_ID, BATCH_POSITION_ID, BATCH_TREND_ID] {
            assert!(get_template_by_id(id).is_some(), "missing template {}", id);
        }
        assert!(get_template_by_id("unknown").is_none());
    }

    #[test]
    fn test_single_template_asks_for_six_parts() {
        let template = get_template_by_id(SINGLE_ANALYSIS_ID).unwrap();
        for n in 1..=6 {
            assert!(template.prompt.contains(&format!("{}. ", n)));
        }
        assert!(template.prompt.contains("繁體中文"));
    }

    #[test]
    fn test_trend_template_spells_out_mapping() {
        let template = get_template_by_id(batch_template_id(BatchLayout::Trend)).unwrap();
        assert!(template.prompt.contains("day → 1d"));
        assert!(template.prompt.contains("week → 1w"));
        assert!(template.prompt.contains("| 檔名 | 代號 | 時間區間 | 趨勢 |"));
        assert!(template.prompt.contains("「多」或「空」"));
    }
}
