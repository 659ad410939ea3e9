use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use rayon::prelude::*;

use southpaw::engine::{predict_matchup, PredictionResult};
use southpaw::profile::{FighterProfile, Matchup};
use southpaw::tuning::Tuning;

struct Cli {
    json: bool,
    card: Option<PathBuf>,
    profiles: Vec<PathBuf>,
}

fn parse_args() -> Result<Cli> {
    let mut json = false;
    let mut card = None;
    let mut profiles = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--card" => {
                let Some(path) = args.next() else {
                    bail!("--card requires a file path");
                };
                card = Some(PathBuf::from(path));
            }
            _ => profiles.push(PathBuf::from(arg)),
        }
    }

    Ok(Cli {
        json,
        card,
        profiles,
    })
}

fn main() -> Result<()> {
    let cli = parse_args()?;
    let tuning = Tuning::default();
    let now = prediction_date();

    if let Some(card_path) = cli.card {
        return run_card(&card_path, &tuning, now, cli.json);
    }

    if cli.profiles.len() != 2 {
        bail!("usage: southpaw <red.json> <blue.json> | southpaw --card <card.json> [--json]");
    }

    let red = load_profile(&cli.profiles[0])?;
    let blue = load_profile(&cli.profiles[1])?;
    let result = predict_matchup(&red, &blue, &tuning, now);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&red, &blue, &result);
    }
    Ok(())
}

/// Fight date for the experience pillar. `PREDICTION_DATE=YYYY-MM-DD` pins it
/// for reproducible output; otherwise today.
fn prediction_date() -> NaiveDate {
    std::env::var("PREDICTION_DATE")
        .ok()
        .and_then(|raw| NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

fn load_profile(path: &Path) -> Result<FighterProfile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read fighter profile {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parse fighter profile {}", path.display()))
}

fn run_card(path: &Path, tuning: &Tuning, now: NaiveDate, json: bool) -> Result<()> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read card {}", path.display()))?;
    let card: Vec<Matchup> =
        serde_json::from_str(&raw).with_context(|| format!("parse card {}", path.display()))?;
    if card.is_empty() {
        eprintln!("card {} has no fights", path.display());
        return Ok(());
    }

    let results: Vec<PredictionResult> = card
        .par_iter()
        .map(|fight| predict_matchup(&fight.red, &fight.blue, tuning, now))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (fight, result) in card.iter().zip(&results) {
        println!(
            "{:>5.1}% {} vs {} {:>5.1}%  (confiance {:>3}) {}",
            result.fighter1_win_probability,
            corner_name(&fight.red, "Coin rouge"),
            corner_name(&fight.blue, "Coin bleu"),
            result.fighter2_win_probability,
            result.confidence_score,
            result.analysis.prediction,
        );
    }
    Ok(())
}

fn corner_name<'a>(fighter: &'a FighterProfile, fallback: &'a str) -> &'a str {
    fighter
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(fallback)
}

fn print_report(red: &FighterProfile, blue: &FighterProfile, result: &PredictionResult) {
    println!(
        "{}  {:>5.1}%",
        corner_name(red, "Coin rouge"),
        result.fighter1_win_probability
    );
    println!(
        "{}  {:>5.1}%",
        corner_name(blue, "Coin bleu"),
        result.fighter2_win_probability
    );
    println!("confiance {}/100", result.confidence_score);

    println!();
    let b = &result.breakdown;
    println!("  striking    {:+.2}", b.striking_advantage);
    println!("  grappling   {:+.2}", b.grappling_advantage);
    println!("  biometrie   {:+.2}", b.biometric_advantage);
    println!("  finish      {:+.2}", b.finish_potential);
    println!("  historique  {:+.2}", b.historical_performance);
    println!("  experience  {:+.2}", b.experience_advantage);

    if !result.analysis.key_factors.is_empty() {
        println!();
        for factor in &result.analysis.key_factors {
            println!("  * {factor}");
        }
    }
    for warning in &result.analysis.warnings {
        eprintln!("  ! {warning}");
    }

    println!();
    println!("{}", result.analysis.prediction);
}
