use std::io::{self, BufWriter, Write};

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kwic::cli::{Cli, OutputFormat};
use kwic::config::Config;
use kwic::{Formatter, KeywordIndex, KwicError, NO_WORDS_MESSAGE, StopWords, build_index, read_corpus, to_entries};

fn setup_logging(verbose: bool) -> Result<()> {
    // --verbose wins over RUST_LOG; without either only warnings are shown
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout carries the concordance, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let corpus_path = cli.corpus.ok_or(KwicError::MissingArgument)?;
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let stopwords_path = cli.stopwords.unwrap_or(config.stopwords);
    let stop_words = StopWords::from_path(&stopwords_path);
    info!(
        corpus = %corpus_path.display(),
        stop_words = stop_words.len(),
        "kwic starting"
    );

    let text = read_corpus(&corpus_path)?;
    let index = build_index(&text, KeywordIndex::new(stop_words));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            if index.is_empty() {
                writeln!(out, "{}", NO_WORDS_MESSAGE)?;
            } else {
                Formatter::new(index.max_lengths(), config.layout)
                    .write_index(&index, &mut out)
                    .context("Failed to write concordance")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &to_entries(&index)).context("Failed to write concordance")?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
