mod config;
mod report;
mod source;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use daybook_aggregate::{parse_roles, CrossJournalSummarizer, Grouping, JournalAnalyzer, ScorePolicy};
use daybook_classifier::Stopwords;
use daybook_protocol::RoleFlags;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::source::{load_results, load_stopwords, AnnotationSource, JsonFileSource};

#[derive(Parser)]
#[command(author, version, about = "Ranked emotional profiles for journal entries")]
struct Cli {
    /// Stopword list, plain text or `.rkyv` lexicon (overrides DAYBOOK_STOPWORDS)
    #[arg(long, global = true, value_name = "FILE")]
    stopwords: Option<PathBuf>,

    /// How merged scores combine: average or sum (overrides DAYBOOK_SCORE_POLICY)
    #[arg(long, global = true)]
    score_policy: Option<ScorePolicy>,

    /// seed or transitive (overrides DAYBOOK_GROUPING)
    #[arg(long, global = true)]
    grouping: Option<Grouping>,

    /// Comma-separated dependency roles that admit OTHER entities (overrides DAYBOOK_ALLOWED_ROLES)
    #[arg(long, global = true, value_parser = parse_roles)]
    roles: Option<RoleFlags>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Profile one journal from its saved backend annotations
    Analyze {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Roll stored journal profiles up into top emotion effectors
    Summarize {
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Evaluate the risk heuristic over stored journal profiles
    Risk {
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Archive a plain-text stopword list
    CompileLexicon {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        #[arg(long = "lexicon-version", default_value_t = 1)]
        lexicon_version: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    init_tracing(config.log_format())?;

    if let Some(path) = cli.stopwords {
        config.set_stopwords_path(path);
    }
    if let Some(policy) = cli.score_policy {
        config.analyzer_mut().score_policy = policy;
    }
    if let Some(grouping) = cli.grouping {
        config.analyzer_mut().grouping = grouping;
    }
    if let Some(roles) = cli.roles {
        config.analyzer_mut().allowed_roles = roles;
    }

    match cli.command {
        Command::Analyze { input, format } => {
            let stopwords = Arc::new(load_stopwords(config.stopwords_path().map(PathBuf::as_path))?);
            let analyzer = JournalAnalyzer::new(stopwords, config.analyzer());

            let annotations = JsonFileSource::new(&input).fetch()?;
            let result = analyzer.analyze(&annotations);
            info!(
                input = %input.display(),
                entities = result.entities.total_len(),
                document_sentiment = result.document_sentiment,
                "analyzed journal"
            );

            match format {
                OutputFormat::Text => print!("{}", report::render_journal(&result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }
        Command::Summarize { inputs, format } => {
            let journals = load_results(&inputs)?;
            let summary = CrossJournalSummarizer::new(config.analyzer().merger())
                .summarize_journals(&journals);

            match format {
                OutputFormat::Text => print!("{}", report::render_summary(&summary, journals.len())),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            }
        }
        Command::Risk { inputs } => {
            let journals = load_results(&inputs)?;
            let flagged = CrossJournalSummarizer::new(config.analyzer().merger()).risk_flag(&journals);
            info!(journals = journals.len(), flagged, "evaluated risk heuristic");
            println!("{flagged}");
        }
        Command::CompileLexicon {
            input,
            output,
            lexicon_version,
        } => {
            info!(input = %input.display(), "reading stopword list");
            let text = fs::read_to_string(&input)
                .with_context(|| format!("failed to read {input:?}"))?;
            let stopwords = Stopwords::from_text(&text);

            let bytes = stopwords.to_archive(lexicon_version)?;
            fs::write(&output, &bytes).with_context(|| format!("failed to write {output:?}"))?;

            info!(
                words = stopwords.len(),
                version = lexicon_version,
                output = %output.display(),
                "lexicon written"
            );
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries the report.
fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    }
    .context("failed to initialize tracing")
}
