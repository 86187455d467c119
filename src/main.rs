use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use network_filter::action::{Action, FilterRun, log_level};
use network_filter::config::FilterSettings;
use network_filter::network::load_network;
use network_filter::report::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Network snapshot exported as JSON
    snapshot: PathBuf,

    #[command(flatten)]
    filter: FilterSettings,

    /// Selected node ids for the selection actions
    #[arg(long = "select", value_name = "ID")]
    selected: Vec<String>,

    /// Widen the selection to every node of the same gene
    #[arg(long)]
    expand_labels: bool,

    #[arg(long, value_enum, default_value_t = Action::Visible)]
    action: Action,

    /// Search the visible nodes by label
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More log output; repeat for debug
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(args.verbose)),
    )
    .init();

    let graph = load_network(&args.snapshot)?;
    let run = FilterRun::execute(
        graph,
        &args.filter,
        args.action,
        &args.selected,
        args.expand_labels,
    );

    let search = args.search.as_deref().map(|query| run.search(query));
    let report = run.report(search, run.seed_genes(&args.filter));
    let rendered = report
        .render(&run.graph, args.format)
        .with_context(|| format!("failed to render report for {}", args.snapshot.display()))?;
    println!("{rendered}");

    Ok(())
}
