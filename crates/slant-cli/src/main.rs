use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use slant_engine::logging::init_logging;

mod args;
mod document;
mod output;

use args::Args;
use document::ShapeDocument;
use output::JsonOutput;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.logging());

    match run(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<String> {
    let source = read_input(args)?;
    let doc: ShapeDocument =
        serde_json::from_str(&source).context("input is not a valid shape document")?;

    let options = args.options();
    log::debug!("converting with {options:?}");
    let conversion = slant_engine::convert_shape(&doc, options).context("conversion failed")?;

    if args.json {
        Ok(serde_json::to_string_pretty(&JsonOutput::from(&conversion))?)
    } else {
        Ok(conversion.to_string())
    }
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    match args.input_path() {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
