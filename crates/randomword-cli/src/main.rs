//! RandomWord CLI - print random words from the random word API

use clap::{Parser, ValueEnum};
use randomword::{RandomWordError, Request, ReqwestTransport, WordList};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One word per line
    #[default]
    Text,
    /// JSON array
    Json,
}

/// RandomWord - fetch random words
#[derive(Parser, Debug)]
#[command(name = "randomword")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of words to fetch (service default if omitted)
    #[arg(long, short, allow_negative_numbers = true)]
    number: Option<i64>,

    /// Exact word length
    #[arg(long, short, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Language code: es, it, de, fr, zh or pt-br
    #[arg(long = "lang")]
    language: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "text")]
    output: OutputFormat,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(words) => writeln_safe(&format_words(&words, cli.output)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: &Cli) -> Result<WordList, RandomWordError> {
    let request = build_request(cli)?;
    tracing::debug!(?request, "Built request");
    request.fetch().await
}

/// Map command line flags onto request options
fn build_request(cli: &Cli) -> Result<Request, RandomWordError> {
    let mut transport = ReqwestTransport::builder();
    if let Some(ua) = &cli.user_agent {
        transport = transport.user_agent(ua.clone());
    }
    if let Some(secs) = cli.timeout {
        transport = transport.timeout(Duration::from_secs(secs));
    }

    let mut builder = Request::builder();
    if let Some(n) = cli.number {
        builder = builder.number(n);
    }
    if let Some(l) = cli.length {
        builder = builder.length(l);
    }
    if let Some(lang) = &cli.language {
        builder = builder.language(lang);
    }

    builder
        .transport(transport.build().map_err(RandomWordError::Internal)?)
        .build()
}

fn format_words(words: &WordList, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => words.join("\n"),
        OutputFormat::Json => serde_json::to_string(words).unwrap_or_else(|e| {
            eprintln!("Error serializing words: {}", e);
            std::process::exit(1);
        }),
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    if s.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
