//! Batch Prompt Example
//!
//! Shows the metadata inferred from conventional chart filenames and the
//! table-only prompts generated for both batch layouts.

use klinereader::prelude::*;

fn main() {
    let files = ["NVDA_3h.png", "TSM_day.png", "2330_week_20250102.jpg"];

    println!("📁 Parsed filenames");
    println!("{}", "=".repeat(60));
    let today = klinereader::utils::today_utc();
    for file in files {
        let info = ChartFileInfo::parse(file);
        println!(
            "{:<26} symbol={:<6} range={:<4} date={}",
            info.filename,
            info.symbol,
            info.time_range_or_dash(),
            extract_report_date(file, today)
        );
    }

    for layout in [BatchLayout::Trend, BatchLayout::Position] {
        println!("\n🤖 Prompt ({} layout)", layout);
        println!("{}", "=".repeat(60));
        println!("{}", build_batch_prompt(&files, layout));
    }
}
