use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use uuid::Uuid;

use burnout_cli::messages::Catalog;
use burnout_cli::render;
use burnout_cli::session::Session;
use burnout_core::models::response::ResponseVector;
use burnout_core::models::submission::Submission;
use burnout_core::scoring;
use burnout_instruments::{all_instruments, resolve_instrument};

#[derive(Parser)]
#[command(name = "burnout", about = "Burnout Check questionnaire runner", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List built-in instruments.
    List,
    /// Show an instrument's domains, scales, and severity bands.
    Show {
        /// Built-in instrument ID or path to a JSON definition.
        instrument: String,
    },
    /// Score a saved response vector.
    Score {
        /// Built-in instrument ID or path to a JSON definition.
        instrument: String,
        /// Path to a JSON array of 0-based option indices (null =
        /// unanswered), one per item.
        #[arg(long)]
        responses: PathBuf,
        /// Emit the submission record as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Administer the questionnaire interactively in the terminal.
    Run {
        /// Built-in instrument ID or path to a JSON definition.
        instrument: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::List => list(),
        Command::Show { instrument } => show(&instrument),
        Command::Score {
            instrument,
            responses,
            json,
        } => score(&instrument, &responses, json),
        Command::Run { instrument } => run(&instrument),
    }
}

fn list() -> Result<()> {
    for instrument in all_instruments() {
        println!(
            "{}  {} ({} items)",
            instrument.id,
            instrument.title,
            instrument.items.len()
        );
    }
    Ok(())
}

fn show(spec: &str) -> Result<()> {
    let instrument = resolve_instrument(spec)?;

    println!("{} ({})", instrument.title, instrument.id);

    println!("\nDomains:");
    for domain in &instrument.domains {
        let count = instrument
            .items
            .iter()
            .filter(|i| i.domain == domain.id)
            .count();
        println!("  {}  {} ({count} items)", domain.id, domain.name);
    }

    println!("\nScales:");
    for (id, scale) in &instrument.response_scales {
        println!("  {id}: {}", scale.labels.join(" / "));
    }

    println!("\nBands:");
    for band in &instrument.bands {
        println!("  {:>5.1} to {:>5.1}  {}", band.min, band.max, band.label);
    }

    Ok(())
}

fn score(spec: &str, responses_path: &PathBuf, json: bool) -> Result<()> {
    let instrument = resolve_instrument(spec)?;
    tracing::debug!(instrument = %instrument.id, "scoring saved responses");

    let contents = std::fs::read_to_string(responses_path).wrap_err_with(|| {
        format!(
            "failed to read responses file {}",
            responses_path.display()
        )
    })?;
    let responses: ResponseVector = serde_json::from_str(&contents)
        .wrap_err("responses must be a JSON array of option indices or null")?;

    let report = scoring::compute_scores(&instrument, &responses)?;

    if json {
        let submission = Submission {
            id: Uuid::new_v4(),
            instrument_id: instrument.id.clone(),
            responses,
            report,
            completed_at: jiff::Timestamp::now(),
        };
        println!("{}", render::render_json(&submission)?);
    } else {
        print!("{}", render::render_text(&instrument, &report, &Catalog));
    }
    Ok(())
}

fn run(spec: &str) -> Result<()> {
    let instrument = resolve_instrument(spec)?;
    tracing::debug!(
        instrument = %instrument.id,
        items = instrument.items.len(),
        "starting administration"
    );
    let catalog = Catalog;
    let mut session = Session::new(&instrument);
    let total = instrument.items.len();
    let stdin = std::io::stdin();

    println!("{}", instrument.title);

    while let Some(item) = session.current_item() {
        let scale = instrument
            .scale(&item.scale)
            .ok_or_else(|| eyre::eyre!("instrument references undefined scale '{}'", item.scale))?;

        println!();
        println!(
            "{}",
            catalog.item_prompt(session.position() + 1, total, &item.text)
        );
        for (i, label) in scale.labels.iter().enumerate() {
            println!("{}", catalog.option_line(i + 1, label));
        }
        println!("{}", catalog.input_hint());
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF: remaining items stay unanswered.
            break;
        }
        let input = line.trim();

        if input.is_empty() {
            session.skip();
            continue;
        }
        if input.eq_ignore_ascii_case("b") {
            session.back();
            continue;
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => {
                if session.answer(n - 1).is_err() {
                    println!("{}", catalog.invalid_option(scale.option_count()));
                }
            }
            _ => println!("{}", catalog.invalid_option(scale.option_count())),
        }
    }

    let submission = session.finish()?;
    let (answered, total) = session.progress();

    println!();
    println!("{}", catalog.progress(answered, total));
    print!(
        "{}",
        render::render_text(&instrument, &submission.report, &catalog)
    );
    Ok(())
}
