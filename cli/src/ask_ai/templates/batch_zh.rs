use crate::ask_ai::types::AskAITemplate;

pub const BATCH_POSITION_ID: &str = "batch-position";
pub const BATCH_TREND_ID: &str = "batch-trend";

pub fn get_batch_chart_templates_zh() -> Vec<AskAITemplate> {
    vec![
        AskAITemplate {
            id: BATCH_POSITION_ID.to_string(),
            title: "📊 多檔股票價格位置總表".to_string(),
            prompt: "請依照上方清單的順序逐一檢視每張K線圖，判斷目前股價在近期區間中的相對位置，並估計最新價格。\n\
請「只」輸出下列格式的 Markdown 表格，不要加上任何前言、說明或結論：\n\
\n\
| 代號 | 相對位置 | 預估價格 |\n\
|------|----------|----------|\n\
\n\
規則：\n\
- 代號使用清單中推測的股票代號。\n\
- 相對位置只能填「高」、「低」或「中」。\n\
- 預估價格請填圖上最新一根K線附近的價格數字，無法判斷時填「-」。\n\
- 每張圖片對應表格中的一列，請使用繁體中文。"
                .to_string(),
        },
        AskAITemplate {
            id: BATCH_TREND_ID.to_string(),
            title: "🧭 多檔股票多空趨勢總表".to_string(),
            prompt: "請依照上方清單的順序逐一檢視每張K線圖並判斷多空趨勢。\n\
檔名解讀規則：\n\
- 第一個底線「_」之前的文字是股票代號。\n\
- 代號之後的第一段文字（以底線分隔，略過日期）是時間區間代碼，對照表：3h → 3h、day → 1d、week → 1w，不在對照表中的代碼照原樣填寫。\n\
- 趨勢只根據圖表最右側（最新）的一段走勢判斷，不要受較早的走勢影響。\n\
\n\
請「只」輸出下列格式的 Markdown 表格，不要加上任何前言、說明或結論：\n\
\n\
| 檔名 | 代號 | 時間區間 | 趨勢 |\n\
|------|------|----------|------|\n\
\n\
規則：\n\
- 趨勢欄只能填「多」或「空」。\n\
- 每張圖片對應表格中的一列，順序與清單相同，請使用繁體中文。"
                .to_string(),
        },
    ]
}
