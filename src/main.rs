use std::path::PathBuf;

use clap::Parser;

mod build;
mod commands;
mod config;
mod report;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[derive(clap::Args, Default)]
struct ConvertArgs {
    /// The markdown file to convert [default: prd.md]
    input: Option<PathBuf>,

    /// Where to write the HTML page [default: prd.html]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The path to the configuration file [default: mdpress.yaml, if present]
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The page title
    #[arg(short, long)]
    title: Option<String>,

    /// Embed the CSS of this syntax highlighting theme
    #[arg(long)]
    highlight_theme: Option<String>,

    /// Open the generated page in the default browser
    #[arg(long, default_value = "false")]
    open: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    commands::convert::run(&args.convert)?;

    Ok(())
}
