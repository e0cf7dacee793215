//! Live preview reconciler harness
//!
//! Folds one entry-editor update into a previously fetched GraphQL record
//! and prints the result together with any messages for the editor.
//!
//! Usage:
//!   livepreview --schema ct.json --record data.json --update entry.json --locale en-US

use anyhow::Result;
use clap::Parser;
use livepreview_cli::{run, PreviewInputs};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "livepreview")]
#[command(about = "Reconcile an entry editor update into a GraphQL response")]
struct Args {
    /// Content type JSON
    #[arg(short, long)]
    schema: PathBuf,

    /// Previously fetched GraphQL record JSON
    #[arg(short, long)]
    record: PathBuf,

    /// Raw entry update JSON
    #[arg(short, long)]
    update: PathBuf,

    /// Locale code to read from the update
    #[arg(short, long, default_value = "en-US")]
    locale: String,

    /// Known referenced entities (list or id-keyed object)
    #[arg(long)]
    references: Option<PathBuf>,

    /// Reconciler config TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Reconciling {:?} into {:?}", args.update, args.record);
    let output = run(&PreviewInputs {
        schema: args.schema,
        record: args.record,
        update: args.update,
        references: args.references,
        config: args.config,
        locale: args.locale,
    })?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
