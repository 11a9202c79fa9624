//! CLI tool to fetch a record collection and print it as a list.
//!
//! Usage:
//!   rec-fetch examples
//!   rec-fetch transactions --base-url http://127.0.0.1:5000
//!   rec-fetch examples --id 1
//!   rec-fetch examples -o records.txt
//!
//! If no output file is specified, writes to stdout.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use reclist_rs::{Endpoint, EndpointKind, ViewState, fetch_example, fetch_records};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    Examples,
    Transactions,
}

impl From<Collection> for EndpointKind {
    fn from(collection: Collection) -> Self {
        match collection {
            Collection::Examples => EndpointKind::Examples,
            Collection::Transactions => EndpointKind::Transactions,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rec-fetch")]
#[command(about = "Fetch a record collection and print it as a list", long_about = None)]
struct Args {
    /// Which collection to fetch
    #[arg(value_enum, default_value_t = Collection::Examples)]
    collection: Collection,

    /// Base URL of the record service
    #[arg(long, default_value = Endpoint::DEFAULT_BASE_URL)]
    base_url: String,

    /// Fetch a single example row by id instead of the whole collection
    #[arg(long)]
    id: Option<i64>,

    /// Write the list to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.id.is_some() && args.collection != Collection::Examples {
        eprintln!("--id is only supported for the examples collection");
        return ExitCode::FAILURE;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let endpoint = Endpoint::new(args.base_url, args.collection.into());

    let lines = if let Some(id) = args.id {
        match rt.block_on(fetch_example(&endpoint, id)) {
            Ok(record) => vec![record.name],
            Err(e) => {
                log::error!("Error fetching data: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match rt.block_on(fetch_records(&endpoint)) {
            Ok(batch) => {
                let mut state = ViewState::new();
                state.replace(batch);
                state.list_items().into_iter().map(|item| item.text).collect()
            }
            Err(e) => {
                log::error!("Error fetching data: {e}");
                return ExitCode::FAILURE;
            }
        }
    };

    let text = lines.join("\n");
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &text) {
                eprintln!("Error writing output file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            eprintln!("Wrote {} records to {}", lines.len(), path.display());
        }
        None => {
            if !text.is_empty() {
                println!("{text}");
            }
            eprintln!("Fetched {} records", lines.len());
        }
    }

    ExitCode::SUCCESS
}
