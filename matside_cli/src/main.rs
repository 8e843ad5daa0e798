use clap::Parser;
use matside_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matside")]
#[command(about = "Pair wrestlers for practice matches by weight and school", long_about = None)]
struct Cli {
    /// Roster file to read
    input: PathBuf,

    /// Where to write the pairing report
    output: PathBuf,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Log every pairing decision
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    matside_core::logging::init_with_level(if cli.verbose { "debug" } else { "info" });

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(
        "Matching with max weight ratio {} and {:?} identity",
        config.matching.max_weight_ratio,
        config.matching.identity
    );

    let roster = load_roster(&cli.input, &config)?;
    let pairings = pair_roster(roster, &config.safety_rule());

    if cli.dry_run {
        tracing::info!("Dry run, skipping write to {:?}", cli.output);
        print!("{}", render_report(&pairings)?);
        println!("\n[Dry run - not writing {}]", cli.output.display());
        return Ok(());
    }

    save_report(&cli.output, &pairings)?;

    println!(
        "✓ {} matches, {} without a match",
        pairings.matches.len(),
        pairings.unmatched.len()
    );
    println!("  Report: {}", cli.output.display());

    Ok(())
}
