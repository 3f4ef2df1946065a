use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use klinereader::{
    prelude::*,
    utils::{format_date, init_logger, today_utc},
};

#[derive(Parser)]
#[command(name = "klinereader")]
#[command(about = "Read candlestick chart images with a generative vision model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the symbol, time range and report date inferred from filenames
    Inspect {
        /// Chart filenames (e.g. NVDA_3h.png)
        #[arg(required = true)]
        filenames: Vec<String>,
    },
    /// Print the prompt that would be sent for the given filenames
    Prompt {
        #[arg(required = true)]
        filenames: Vec<String>,
        /// Use the six-part single chart prompt (first filename only)
        #[arg(long)]
        single: bool,
        /// Batch table layout (trend or position)
        #[arg(short, long, default_value = "trend")]
        layout: BatchLayout,
    },
    /// Analyze local chart images with Gemini (needs GEMINI_API_KEY)
    Analyze {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        single: bool,
        #[arg(short, long, default_value = "trend")]
        layout: BatchLayout,
    },
}

fn analysis_mode(single: bool, layout: BatchLayout) -> AnalysisMode {
    if single {
        AnalysisMode::Single
    } else {
        AnalysisMode::Batch(layout)
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { filenames } => {
            let today = today_utc();
            println!("{:<32} {:<10} {:<8} {}", "檔名", "代號", "區間", "報告日期");
            for filename in &filenames {
                let info = ChartFileInfo::parse(filename);
                let supported = if is_allowed_image(filename) { "" } else { "  (格式不支援)" };
                println!(
                    "{:<32} {:<10} {:<8} {}{}",
                    info.filename,
                    info.symbol,
                    info.time_range_or_dash(),
                    extract_report_date(filename, today),
                    supported
                );
            }
            println!("\n今日日期：{}", format_date(today));
        }
        Commands::Prompt {
            filenames,
            single,
            layout,
        } => {
            let prompt = build_prompt(analysis_mode(single, layout), &filenames);
            println!("{}", prompt);
        }
        Commands::Analyze {
            paths,
            single,
            layout,
        } => {
            let mode = analysis_mode(single, layout);
            let paths: Vec<PathBuf> = match mode {
                AnalysisMode::Single => paths.into_iter().take(1).collect(),
                AnalysisMode::Batch(_) => paths,
            };
            let filenames: Vec<String> = paths.iter().map(|p| display_name(p)).collect();

            let mut images = Vec::with_capacity(paths.len());
            for (path, filename) in paths.iter().zip(&filenames) {
                let image = ImagePayload::load(path, filename.clone())
                    .await
                    .with_context(|| format!("cannot use {}", path.display()))?;
                images.push(image);
            }

            let client = GeminiClient::new(GeminiConfig::from_env())?;
            let prompt = build_prompt(mode, &filenames);
            let outcome = client.generate(&prompt, &images).await;
            let result = AnalysisResult::new(outcome, filenames);

            println!("{}", result.display_text());
            if !result.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
