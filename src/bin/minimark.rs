//! Command-line front end for minimark.
//!
//! Usage:
//!   minimark [INPUT] [-o OUTPUT]   - Render a Markdown file (or stdin) to HTML
//!   minimark [INPUT] --blocks      - List every block with its classification
//!
//! Set `RUST_LOG=debug` to trace block classification.
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use minimark::{block_to_block_type, markdown_to_blocks};

#[derive(Parser)]
#[command(name = "minimark")]
#[command(version, about = "Render a Markdown subset to HTML")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output HTML file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print each block and its type instead of rendering
    #[arg(long)]
    blocks: bool,
}

fn read_input(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn list_blocks(markdown: &str) -> String {
    let mut out = String::new();
    for (i, block) in markdown_to_blocks(markdown).into_iter().enumerate() {
        let kind = block_to_block_type(block);
        out.push_str(&format!("[{i}] {kind}\n{block}\n\n"));
    }
    out
}

fn render(markdown: &str) -> Result<String, minimark::Error> {
    for block in markdown_to_blocks(markdown) {
        log::debug!("{} block: {:?}", block_to_block_type(block), block);
    }
    minimark::html_of(markdown)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let markdown = match read_input(cli.input.as_ref()) {
        Ok(content) => content,
        Err(e) => {
            let source = cli.input.as_ref().map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
            log::error!("Error reading {source}: {e}");
            eprintln!("Error reading {source}: {e}");
            std::process::exit(1);
        }
    };

    let output = if cli.blocks {
        list_blocks(&markdown)
    } else {
        match render(&markdown) {
            Ok(html) => html,
            Err(e) => {
                log::error!("conversion failed: {e}");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    };

    let written = match &cli.output {
        Some(path) => fs::write(path, &output).map(|_| log::info!("Wrote {}", path.display())),
        None => io::stdout().write_all(output.as_bytes()),
    };
    if let Err(e) = written {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }
}
