//! xlsx2json CLI - Convert the first sheet of a spreadsheet to JSON
//!
//! ```bash
//! xlsx2json data.xlsx                                   # writes data.json
//! xlsx2json data.xlsx output.json
//! xlsx2json data.xlsx output.json --translate
//! xlsx2json data.xlsx output.json --translate --engine=vitalets
//! xlsx2json data.xlsx output.json --translate --engine=google-x
//! xlsx2json                                             # usage + spreadsheets here
//! ```

use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use xlsx2json::{convert, find_spreadsheets, ConvertOptions, Engine};

#[derive(Parser)]
#[command(name = "xlsx2json", version)]
#[command(about = "Convert the first sheet of a spreadsheet to a JSON array", long_about = None)]
struct Cli {
    /// Spreadsheet to convert (.xlsx, .xls, .xlsb, .ods, .csv)
    input: Option<PathBuf>,

    /// Output JSON file (default: input path with a .json extension)
    output: Option<PathBuf>,

    /// Translate Chinese column headers into English identifiers
    #[arg(long)]
    translate: bool,

    /// Translation engine: vitalets (default) or google-x
    #[arg(long, default_value = xlsx2json::translate::DEFAULT_ENGINE_TAG)]
    engine: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.input {
        None => cmd_usage(),
        Some(ref input) => {
            let options = ConvertOptions {
                output_path: cli.output.clone(),
                translate_headers: cli.translate,
                engine: cli.engine.clone(),
            };
            cmd_convert(input, options).await
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_convert(input: &Path, options: ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert(input, options).await?;
    println!("\n✨ Done! {} records written to {}", result.records.len(), result.output_path.display());
    Ok(())
}

fn cmd_usage() -> Result<(), Box<dyn std::error::Error>> {
    Cli::command().print_help()?;

    println!();
    println!("Examples:");
    println!("  xlsx2json data.xlsx");
    println!("  xlsx2json data.xlsx output.json");
    println!("  xlsx2json data.xlsx output.json --translate");
    println!("  xlsx2json data.xlsx output.json --translate --engine=vitalets");
    println!("  xlsx2json data.xlsx output.json --translate --engine=google-x");
    println!();
    println!("Translation engines:");
    for engine in Engine::ALL {
        println!("  {:<10} {}", engine.tag(), engine.description());
    }
    println!();
    println!("Spreadsheets in the current directory:");

    let files = find_spreadsheets(Path::new("."))?;
    if files.is_empty() {
        println!("  (none found)");
    } else {
        for file in files {
            println!("  - {}", file);
        }
    }

    Ok(())
}
