use serde::{Deserialize, Serialize};

/// Time-range codes recognised in chart filenames (`NVDA_day.png` -> `1d`)
const TIME_RANGE_CODES: [(&str, &str); 3] = [("3h", "3h"), ("day", "1d"), ("week", "1w")];

/// Image extensions accepted for upload and analysis
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Metadata inferred from a chart filename following the `SYMBOL_RANGE.ext` convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFileInfo {
    pub filename: String,
    pub symbol: String,
    /// First token after the symbol that is not a date, extension stripped
    pub range_code: Option<String>,
    /// `range_code` after the lookup table, unmapped codes pass through
    pub time_range: Option<String>,
}

impl ChartFileInfo {
    /// Parse a filename. Never fails: missing delimiters degrade to coarser guesses.
    pub fn parse(filename: &str) -> Self {
        let symbol = extract_symbol(filename).to_string();
        let range_code = extract_range_code(filename).map(str::to_string);
        let time_range = range_code.as_deref().map(|code| map_time_range(code).to_string());

        Self {
            filename: filename.to_string(),
            symbol,
            range_code,
            time_range,
        }
    }

    /// Time range for display, `-` when the filename carried none
    pub fn time_range_or_dash(&self) -> &str {
        self.time_range.as_deref().unwrap_or("-")
    }
}

/// Substring before the first `_`, else before the first `.`, else the whole filename
pub fn extract_symbol(filename: &str) -> &str {
    if let Some((symbol, _)) = filename.split_once('_') {
        symbol
    } else if let Some((symbol, _)) = filename.split_once('.') {
        symbol
    } else {
        filename
    }
}

// `20250102`, `2025-01-02`: tokens that carry the report date rather than a range
fn is_date_token(token: &str) -> bool {
    token.len() >= 6
        && token.chars().all(|c| c.is_ascii_digit() || c == '-')
        && token.chars().filter(char::is_ascii_digit).count() >= 6
}

/// Range token: the first `_`-separated token after the symbol, skipping dates.
///
/// `NVDA_day_20250102.png` and `NVDA_20250102_day.png` both yield `day`.
pub fn extract_range_code(filename: &str) -> Option<&str> {
    let (_, rest) = filename.split_once('_')?;
    let stem = match rest.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => rest,
    };
    stem.split('_')
        .find(|token| !token.is_empty() && !is_date_token(token))
}

pub fn map_time_range(code: &str) -> &str {
    TIME_RANGE_CODES
        .iter()
        .find(|(from, _)| *from == code)
        .map(|(_, to)| *to)
        .unwrap_or(code)
}

/// Lower-cased extension after the last `.`, if any
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

pub fn is_allowed_image(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
