//! Command line front end for trying address bar input interpretation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use omnibar::{
    classify, display_text, interpret, is_supported_protocol, normalize, representative_snippet,
    scheme_of, search_terms_or_url, strip_user_info, Interpretation, SearchEngineRegistry,
};

#[derive(Parser)]
#[command(name = "omnibar")]
#[command(version)]
#[command(about = "Interpret address bar input as a URL or a search", long_about = None)]
struct Cli {
    /// JSON file with search engine definitions (default: built-in engines)
    #[arg(long, global = true, value_name = "FILE")]
    engines: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decide whether to navigate or search, and print the URL to load
    Interpret { input: String },
    /// Print how the input is classified
    Classify { input: String },
    /// Print the canonical URL for the input
    Normalize { input: String },
    /// Print the URL without user-info
    Strip { url: String },
    /// Print the representative label of a URL
    Snippet { url: String },
    /// Print the search terms behind a result page URL, or the URL
    Terms { url: String },
    /// Print what the address bar shows for an observed URL
    Display { url: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let registry = match cli.engines {
        Some(path) => match SearchEngineRegistry::from_json_file(&path) {
            Ok(registry) => registry,
            Err(err) => {
                eprintln!("Failed to load {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => SearchEngineRegistry::builtin(),
    };
    debug!("Using {} search engines", registry.len());

    match cli.command {
        Command::Interpret { input } => match interpret(&input, &registry) {
            Interpretation::Empty => println!("(empty)"),
            Interpretation::Navigate { url } => {
                let scheme = scheme_of(&url).unwrap_or_default();
                println!("navigate {url}");
                if !is_supported_protocol(scheme.as_str()) {
                    println!("  note: scheme {scheme:?} is not handled by the browser");
                }
            }
            Interpretation::Search { url, terms } => println!("search {terms:?} -> {url}"),
        },
        Command::Classify { input } => println!("{:?}", classify(&input)),
        Command::Normalize { input } => println!("{}", normalize(&input)),
        Command::Strip { url } => println!("{}", strip_user_info(&url)),
        Command::Snippet { url } => println!("{}", representative_snippet(&url)),
        Command::Terms { url } => println!("{}", search_terms_or_url(&url, &registry)),
        Command::Display { url } => println!("{}", display_text(&url, &registry)),
    }

    ExitCode::SUCCESS
}
