use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, Level};

use paracheck::history::{HistoryEntry, HistoryStore, JsonHistoryStore, ProcessingKind};
use paracheck::quota::{EntitlementGate, Tier, TierLimits};
use paracheck::reader::{resolve_inputs, InputSource, ReaderConfig, TextReader};
use paracheck::{EngineConfig, ParaphraseStyle, Paraphraser, PlagiarismEngine, PlagiarismReport, SeededRng};

#[derive(Parser, Debug)]
#[command(name = "paracheck")]
#[command(about = "Passage-overlap checking and dictionary paraphrasing against a fixed reference corpus")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON engine configuration (corpus, dictionaries, thresholds)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON history file; every report is recorded here
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Caller identity for history records and quota checks
    #[arg(long, global = true)]
    user_id: Option<String>,

    /// Subscription tier used by the quota check
    #[arg(long, global = true, default_value = "basic")]
    tier: Tier,

    /// Abort on first unreadable input
    #[arg(long, global = true)]
    fail_fast: bool,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check files, glob patterns or stdin for overlap with the reference corpus
    Check {
        inputs: Vec<String>,

        /// Run the detectors of each check on separate threads
        #[arg(long)]
        concurrent: bool,
    },
    /// Rewrite a document with dictionary substitutions
    Paraphrase {
        input: Option<String>,

        #[arg(long, default_value = "standard")]
        style: ParaphraseStyle,

        /// Seed for reproducible creative substitutions and scores
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the reference corpus
    Corpus,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    source: String,
    #[serde(flatten)]
    report: &'a PlagiarismReport,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    // WHY: stdout carries the JSON reports, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => EngineConfig::load(path).await?,
        None => EngineConfig::default(),
    };

    match &args.command {
        Command::Check { inputs, concurrent } => run_check(&args, inputs, *concurrent, config).await,
        Command::Paraphrase { input, style, seed } => run_paraphrase(&args, input.as_deref(), *style, *seed, config).await,
        Command::Corpus => {
            println!("{}", serde_json::to_string_pretty(&config.corpus)?);
            Ok(())
        }
    }
}

async fn run_check(args: &Args, inputs: &[String], concurrent: bool, config: EngineConfig) -> Result<()> {
    let sources = resolve_inputs(inputs)?;
    let total = sources.len();
    let mut history = open_history(args).await?;
    enforce_quota(args, history.as_ref(), ProcessingKind::Plagiarism, total)?;

    let engine = Arc::new(PlagiarismEngine::new(config)?);
    let reader = Arc::new(TextReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    }));

    // WHY: buffered (not buffer_unordered) keeps reports in input order
    let results: Vec<(InputSource, Result<(String, PlagiarismReport)>)> = stream::iter(sources)
        .map(|source| {
            let engine = Arc::clone(&engine);
            let reader = Arc::clone(&reader);
            async move {
                let outcome = check_source(engine, &reader, &source, concurrent).await;
                (source, outcome)
            }
        })
        .buffered(num_cpus::get().max(1))
        .collect()
        .await;

    let mut failures = 0usize;
    for (source, outcome) in results {
        match outcome {
            Ok((text, report)) => {
                if let Some(store) = history.as_mut() {
                    store.record(HistoryEntry::for_plagiarism(args.user_id.as_deref(), &text, &report));
                }
                let output = CheckOutput {
                    source: source.to_string(),
                    report: &report,
                };
                println!("{}", serde_json::to_string(&output)?);
            }
            Err(e) if args.fail_fast => {
                save_history(args, history.as_ref()).await?;
                return Err(e.context(format!("Check of {source} failed")));
            }
            Err(e) => {
                error!("Check of {} failed: {:#}", source, e);
                failures += 1;
            }
        }
    }

    save_history(args, history.as_ref()).await?;
    info!(inputs = total, failures, "Check run complete");

    if failures > 0 {
        anyhow::bail!("{failures} of {total} inputs could not be checked");
    }
    Ok(())
}

async fn check_source(
    engine: Arc<PlagiarismEngine>,
    reader: &TextReader,
    source: &InputSource,
    concurrent: bool,
) -> Result<(String, PlagiarismReport)> {
    let (text, stats) = reader.read(source).await?;
    if let Some(read_error) = stats.read_error {
        anyhow::bail!(read_error);
    }

    // detection is CPU-bound
    let (text, report) = tokio::task::spawn_blocking(move || {
        let report = if concurrent {
            engine.check_concurrent(&text)
        } else {
            engine.check(&text)
        };
        report.map(|report| (text, report))
    })
    .await??;
    Ok((text, report))
}

async fn run_paraphrase(
    args: &Args,
    input: Option<&str>,
    style: ParaphraseStyle,
    seed: Option<u64>,
    config: EngineConfig,
) -> Result<()> {
    let inputs: Vec<String> = input.map(str::to_string).into_iter().collect();
    let sources = resolve_inputs(&inputs)?;
    let [source] = sources.as_slice() else {
        anyhow::bail!("paraphrase takes exactly one input, {} matched", sources.len());
    };

    let mut history = open_history(args).await?;
    enforce_quota(args, history.as_ref(), ProcessingKind::Paraphrase, 1)?;

    let reader = TextReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    let (text, _stats) = reader.read(source).await?;

    let paraphraser = Paraphraser::new(&config)?;
    let mut rng = seed.map(SeededRng::new).unwrap_or_else(SeededRng::from_time);
    let report = paraphraser
        .paraphrase(&text, style, &mut rng)
        .with_context(|| format!("Paraphrase of {source} failed"))?;

    if let Some(store) = history.as_mut() {
        store.record(HistoryEntry::for_paraphrase(args.user_id.as_deref(), &text, style, &report));
    }
    save_history(args, history.as_ref()).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn open_history(args: &Args) -> Result<Option<JsonHistoryStore>> {
    match &args.history {
        Some(path) => Ok(Some(JsonHistoryStore::load(path).await?)),
        None => Ok(None),
    }
}

async fn save_history(args: &Args, history: Option<&JsonHistoryStore>) -> Result<()> {
    if let (Some(path), Some(store)) = (&args.history, history) {
        store.save(path).await?;
    }
    Ok(())
}

/// Quota applies only when both a caller and a usage record are known; every requested run
/// must fit within the tier's limit
fn enforce_quota(args: &Args, history: Option<&JsonHistoryStore>, kind: ProcessingKind, requests: usize) -> Result<()> {
    let (Some(user_id), Some(store)) = (args.user_id.as_deref(), history) else {
        return Ok(());
    };

    let usage = store.usage_count(user_id, kind);
    TierLimits::default().check(args.tier, kind, usage + requests.saturating_sub(1))?;

    info!(user_id, tier = %args.tier, %kind, usage, "Quota check passed");
    Ok(())
}
