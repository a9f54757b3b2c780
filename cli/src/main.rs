use anyhow::Result;
use clap::Parser;
use engine::{render, search, HighlightStyle, InvertedIndex, ResultEntry, SearchMode};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::Config;

const BANNER: &str = "\
sonnet-search: positional full-text search over Shakespeare's sonnets
type a query, or :help for commands";

const HELP: &str = "\
any other input is searched as a query
  :mode AND|OR           every word must match / any word may match
  :highlight ON|OFF      toggle match highlighting
  :hlmode DEFAULT|GREEN  highlight style
  :help                  this text
  :quit                  exit";

#[derive(Parser)]
#[command(name = "sonnet-search")]
#[command(about = "Interactive full-text search over Shakespeare's sonnets")]
struct Args {
    /// Sonnet cache file (fetched from PoetryDB when missing)
    #[arg(long, default_value = "sonnets.json")]
    cache: PathBuf,
    /// Config file path
    #[arg(long, default_value = "config.json")]
    config: PathBuf,
    /// Run a single query and exit instead of starting the prompt
    #[arg(long)]
    query: Option<String>,
    /// Search mode for --query, overriding the configured one
    #[arg(long)]
    mode: Option<SearchMode>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut config = Config::load(&args.config);
    let documents = loader::load_sonnets(&args.cache)?;
    let index = InvertedIndex::build(documents)?;
    tracing::info!(docs = index.doc_count(), terms = index.term_count(), "index ready");

    if let Some(query) = args.query {
        if let Some(mode) = args.mode {
            config.search_mode = mode;
        }
        run_query(&index, &query, &config);
        return Ok(());
    }

    println!("{BANNER}");
    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        match raw {
            ":quit" => {
                println!("Bye.");
                break;
            }
            ":help" => println!("{HELP}"),
            _ if raw.starts_with(':') => {
                if !commands::dispatch(raw, &mut config, &args.config) {
                    println!("unknown command {raw:?}; try :help");
                }
            }
            query => run_query(&index, query, &config),
        }
    }
    Ok(())
}

fn run_query(index: &InvertedIndex, query: &str, config: &Config) {
    let start = Instant::now();
    let results = search(index, query, config.search_mode);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    println!("\nQuery: {query:?}");
    println!("Matches: {} sonnet(s)  |  time: {elapsed_ms:.2} ms", results.len());

    let style = config.highlight.then_some(config.hl_mode);
    for (idx, result) in results.iter().enumerate() {
        print_result(idx + 1, result, style);
    }
}

fn print_result(idx: usize, result: &ResultEntry, style: Option<HighlightStyle>) {
    let title = match style {
        Some(s) if !result.title_spans.is_empty() => render(&result.title, &result.title_spans, s),
        _ => result.title.clone(),
    };
    println!("\n{idx}. {title}  [{} occurrence(s)]", result.occurrences);
    for (line_no, m) in &result.line_matches {
        let text = match style {
            Some(s) => render(&m.text, &m.spans, s),
            None => m.text.clone(),
        };
        // 1-based line numbers for display
        println!("   {:>3}  {text}", line_no + 1);
    }
}
