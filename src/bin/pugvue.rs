use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pugvue::ast::Node;
use pugvue::options::CompileOptions;
use pugvue::plugin::{CompilerPlugin, VueLowering};

/// Lower a parsed Pug AST to Vue directive form.
///
/// Reads the AST as JSON, rewrites conditionals, loops and buffered code
/// into Vue template syntax, and writes the lowered AST back out as JSON.
#[derive(Parser, Debug)]
#[command(name = "pugvue", version)]
struct Args {
    /// Input AST JSON file, or `-` for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Write the lowered AST here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the emitted JSON.
    #[arg(long)]
    pretty: bool,

    /// Template filename to report in diagnostics, for trees whose nodes
    /// carry no `filename` of their own.
    #[arg(long)]
    filename: Option<String>,
}

fn main() -> Result<()> {
    // Initialize tracing if PUGVUE_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports PUGVUE_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    pugvue::tracing_config::init_tracing();

    let args = Args::parse();

    let source = read_input(&args.input)?;
    let tree: Node = serde_json::from_str(&source).with_context(|| {
        format!(
            "{} is not a Pug AST JSON document",
            describe_input(&args.input)
        )
    })?;

    let options = CompileOptions {
        filename: args.filename.clone(),
        ..CompileOptions::default()
    };
    let lowered = VueLowering
        .pre_codegen(tree, &options)
        .context("failed to lower template tree")?;

    let mut json = if args.pretty {
        serde_json::to_string_pretty(&lowered)?
    } else {
        serde_json::to_string(&lowered)?
    };
    json.push('\n');

    match &args.output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{json}"),
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn describe_input(input: &str) -> &str {
    if input == "-" { "stdin" } else { input }
}
