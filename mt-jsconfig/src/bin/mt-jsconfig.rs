/// CLI: reads a JSON render context from a file or stdin, emits `config.js`
/// to stdout.
///
/// Usage:
///   mt-jsconfig context.json > config.js
///   mt-jsconfig --escape --convert-codes < context.json > config.js
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mt_jsconfig::{emit_js, loader, EmitOptions};

#[derive(Parser)]
#[command(name = "mt-jsconfig")]
#[command(about = "Emit machine-translation API keys and language lists as JS globals")]
struct Cli {
    /// JSON context file; stdin when omitted
    context: Option<PathBuf>,

    /// Escape string values instead of interpolating them verbatim
    #[arg(long)]
    escape: bool,

    /// Put every language array on multiple lines
    #[arg(long)]
    uniform: bool,

    /// Convert locale codes (pt_BR) to each provider's language codes
    #[arg(long)]
    convert_codes: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut ctx = match &cli.context {
        Some(path) => loader::from_path(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read stdin")?;
            loader::from_json_str(&buf).context("Invalid context on stdin")?
        }
    };

    if cli.convert_codes {
        ctx = ctx.with_converted_languages();
    }

    let mut opts = EmitOptions::default();
    if cli.escape {
        opts = opts.escaped();
    }
    if cli.uniform {
        opts = opts.uniform();
    }

    print!("{}", emit_js::emit_with(&ctx, &opts));
    Ok(())
}
