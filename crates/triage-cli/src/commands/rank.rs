//! Ranking commands: `analyze` and `suggest`.

use clap::Args;
use std::path::PathBuf;
use triage_core::{Config, Ranker, RawTask, ScoredTask, Strategy, Suggestion};

use super::input::read_tasks;

/// Options shared by every command that reads a task list.
#[derive(Args)]
pub struct InputArgs {
    /// JSON file holding a list of tasks (stdin when omitted or "-")
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Strategy name (smart_balance, fastest_wins, high_impact, deadline_driven)
    #[arg(short, long)]
    strategy: Option<String>,
    /// Reject task lists that reuse an id
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args)]
pub struct SuggestArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Number of tasks to suggest (default from config)
    #[arg(short, long)]
    limit: Option<usize>,
}

/// Rank a batch using config defaults for anything not given on the command line.
fn rank_input(
    input: &InputArgs,
    config: &Config,
) -> Result<(Strategy, Vec<ScoredTask>), Box<dyn std::error::Error>> {
    let tasks: Vec<RawTask> = read_tasks(input.file.as_deref())?;
    let strategy = input
        .strategy
        .as_deref()
        .map_or_else(|| config.strategy(), Strategy::from_name);
    let ranker = Ranker::new(strategy);

    let ranked = if input.strict || config.ranking.strict_ids {
        ranker.rank_checked(&tasks)?
    } else {
        ranker.rank(&tasks)
    };
    Ok((strategy, ranked))
}

pub fn analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (_, ranked) = rank_input(&args.input, &config)?;
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

pub fn suggest(args: SuggestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let (strategy, ranked) = rank_input(&args.input, &config)?;
    let limit = args.limit.unwrap_or(config.ranking.suggest_limit);
    let suggestion = Suggestion::from_ranked(strategy.name(), ranked, limit);
    println!("{}", serde_json::to_string_pretty(&suggestion)?);
    Ok(())
}
