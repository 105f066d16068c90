//! `study-review`: command-line front end for the review engine.
//! Scores an answer, orders a deck exported as JSON, or prints deck counts.
//! Output is JSON on stdout; logs go to stderr.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use study_review_engine::{
    config::ENV_SCORING_CONFIG_PATH, scoring::Feedback, shuffle, shuffle_random, telemetry,
    AnswerScorer, Deck, DeckStats, FilterType, QueueOptions, ReviewQueueBuilder, ScoringConfig,
    ScoringResult, SortType,
};

#[derive(Debug, Parser)]
#[command(name = "study-review", version, about = "Flashcard answer scoring and review queues")]
struct Cli {
    /// Scoring config file (TOML or JSON).
    #[arg(long, global = true, env = ENV_SCORING_CONFIG_PATH)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a typed answer against the reference answer.
    Score {
        #[arg(long)]
        answer: String,
        #[arg(long)]
        reference: String,
    },
    /// Print the ordered review queue for a deck.
    Queue {
        /// JSON array of flashcards.
        #[arg(long)]
        deck: PathBuf,
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(long, default_value = "default")]
        sort: String,
        /// Only cards generated from this note.
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        shuffle: bool,
        /// Seed for a reproducible shuffle.
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,
        /// Evaluate due-ness at this RFC 3339 instant instead of now.
        #[arg(long)]
        now: Option<String>,
    },
    /// Print per-filter counts for a deck.
    Stats {
        #[arg(long)]
        deck: PathBuf,
        #[arg(long)]
        now: Option<String>,
    },
}

#[derive(Serialize)]
struct ScoreOut {
    result: ScoringResult,
    feedback: Feedback,
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();
    telemetry::describe_metrics();

    let cli = Cli::parse();
    match cli.command {
        Command::Score { answer, reference } => {
            let scorer = load_scorer(cli.config)?;
            let result = scorer.score(&answer, &reference);
            let feedback = result.feedback();
            print_json(&ScoreOut { result, feedback })
        }
        Command::Queue {
            deck,
            filter,
            sort,
            note,
            shuffle: do_shuffle,
            seed,
            now,
        } => {
            let cards = load_deck(&deck)?;
            let mut opts = QueueOptions::new(filter.parse::<FilterType>()?, sort.parse::<SortType>()?);
            opts.scope_note_id = note;

            let builder = ReviewQueueBuilder::new(parse_now(now.as_deref())?);
            let mut queue = builder.build(&cards, &opts);
            if do_shuffle {
                queue = match seed {
                    Some(s) => shuffle(&queue, &mut StdRng::seed_from_u64(s)),
                    None => shuffle_random(&queue),
                };
            }
            if queue.is_empty() {
                info!(filter = %opts.filter, "no cards match; try --filter all");
            }
            print_json(&queue)
        }
        Command::Stats { deck, now } => {
            let cards = load_deck(&deck)?;
            print_json(&DeckStats::collect(&cards, parse_now(now.as_deref())?))
        }
    }
}

fn load_scorer(path: Option<PathBuf>) -> Result<AnswerScorer> {
    match path {
        Some(p) => Ok(AnswerScorer::new(ScoringConfig::load_from_file(&p)?)),
        None => AnswerScorer::from_env(),
    }
}

fn load_deck(path: &Path) -> Result<Deck> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading deck from {}", path.display()))?;
    let cards: Deck = serde_json::from_str(&raw)
        .with_context(|| format!("parsing deck {}", path.display()))?;
    info!(cards = cards.len(), path = %path.display(), "deck loaded");
    Ok(cards)
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        None => Ok(Utc::now()),
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now timestamp: {s}"))?
            .with_timezone(&Utc)),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
