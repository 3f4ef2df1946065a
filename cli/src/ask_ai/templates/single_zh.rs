use crate::ask_ai::types::AskAITemplate;

pub const SINGLE_ANALYSIS_ID: &str = "single-analysis";

pub fn get_single_chart_templates_zh() -> Vec<AskAITemplate> {
    vec![AskAITemplate {
        id: SINGLE_ANALYSIS_ID.to_string(),
        title: "📈 單張K線圖完整分析".to_string(),
        prompt: "請分析這張K線圖並提供以下資訊：\n\
1. 目前的趨勢方向（上漲、下跌、橫盤）\n\
2. 技術型態分析（如：三角形、旗形、頭肩型等）\n\
3. 支撐與壓力位分析\n\
4. 交易量分析（如果圖中有顯示）\n\
5. 整體市場情緒判斷\n\
6. 可能的交易建議或風險提醒\n\
\n\
請用繁體中文回答，並保持專業且易懂的語調。"
            .to_string(),
    }]
}
