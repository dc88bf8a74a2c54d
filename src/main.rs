use std::env;
use std::io::stdout;

use anyhow::Context;
use tokio::sync::mpsc;

use procupine::engine::{Analysis, Analyzer};
use procupine::record::RawRow;
use procupine::{export, read_rows, report};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = parse_args();
    let analysis = run_analysis(&args.sheet_path).await?;

    report::render(&analysis, stdout()).context("Failed to write report")?;

    if let Some(export_path) = &args.export_path {
        export::write_opportunities(export_path, &analysis.items)
            .with_context(|| format!("Failed to export opportunities to '{}'", export_path))?;
        println!("Saved '{}'", export_path);
    }

    Ok(())
}

struct Args {
    sheet_path: String,
    export_path: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => Args {
            sheet_path: "idi_procurement_mvp.csv".to_string(),
            export_path: None,
        },
        2 => Args {
            sheet_path: args[1].clone(),
            export_path: None,
        },
        3 => Args {
            sheet_path: args[1].clone(),
            export_path: Some(args[2].clone()),
        },
        _ => {
            eprintln!("Usage: {} [sheet_csv] [export_csv]", args[0]);
            eprintln!("  sheet_csv:  Path to procurement sheet (default: idi_procurement_mvp.csv)");
            eprintln!("  export_csv: Optional path for the opportunity listing export");
            std::process::exit(1);
        }
    }
}

async fn run_analysis(sheet_path: &str) -> anyhow::Result<Analysis> {
    println!("Analyzing procurement sheet: {}", sheet_path);

    let text = match std::fs::read_to_string(sheet_path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            eprintln!("No sheet at '{}', rendering an empty report", sheet_path);
            return Ok(Analysis::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read '{}'", sheet_path));
        }
    };

    // Create a channel to send rows to the analyzer
    let (row_channel, mut rx) = mpsc::channel::<RawRow>(100);

    // Spawn analyzer task
    let handle = tokio::spawn(async move {
        let mut analyzer = Analyzer::new();

        while let Some(row) = rx.recv().await {
            analyzer.ingest(&row);
        }

        analyzer.finish()
    });

    for row in read_rows(&text) {
        row_channel.send(row).await.expect("Receiver dropped");
    }
    drop(row_channel);

    handle.await.context("Analyzer task failed")
}
