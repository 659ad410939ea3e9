//! Matchup aggregation: blends the six pillar scores into a win-probability
//! pair, estimates confidence from raw-data completeness, and builds the
//! qualitative analysis shown to members.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::numeric::amplify;
use crate::pillars::{self, PillarScores};
use crate::profile::FighterProfile;
use crate::tuning::Tuning;
use crate::weights::{self, classify_style};

/// Pillar magnitude past which a key factor is reported.
const KEY_FACTOR_THRESHOLD: f64 = 0.2;
/// The biometric pillar reports at a lower magnitude.
const BIOMETRIC_FACTOR_THRESHOLD: f64 = 0.15;
/// Confidence below this adds the low-data warning.
const LOW_CONFIDENCE_FLOOR: u8 = 60;
/// Final scores inside this band read as a toss-up.
const TOSS_UP_BAND: f64 = 0.15;
/// Final scores beyond this band read as a probable victory.
const STRONG_EDGE: f64 = 0.4;
/// Fields counted by the completeness census (eight per fighter).
const CENSUS_FIELDS: f64 = 16.0;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub fighter1_win_probability: f64,
    pub fighter2_win_probability: f64,
    pub confidence_score: u8,
    pub breakdown: PillarBreakdown,
    pub analysis: FightAnalysis,
}

/// The six pillar scores, rounded to two decimals for display. Positive
/// favors the red corner.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarBreakdown {
    pub striking_advantage: f64,
    pub grappling_advantage: f64,
    pub biometric_advantage: f64,
    pub finish_potential: f64,
    pub historical_performance: f64,
    pub experience_advantage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FightAnalysis {
    pub key_factors: Vec<String>,
    pub warnings: Vec<String>,
    pub prediction: String,
}

/// Scores one matchup. Pure and infallible: missing or malformed profile
/// data degrades the scores and the confidence, never the call. `now` anchors
/// the experience pillar's tenure arithmetic.
pub fn predict_matchup(
    red: &FighterProfile,
    blue: &FighterProfile,
    tuning: &Tuning,
    now: NaiveDate,
) -> PredictionResult {
    let scores = pillars::compute_pillars(red, blue, tuning, now);

    let selected = weights::select_weights(
        classify_style(red.fighting_style.as_deref()),
        classify_style(blue.fighting_style.as_deref()),
    );
    let weights = weights::redistribute_dead_weight(selected, &scores, &tuning.aggregate);

    let blended = scores.striking * weights.striking
        + scores.grappling * weights.grappling
        + scores.biometric * weights.biometric
        + scores.finish * weights.finish
        + scores.historical * weights.historical
        + scores.experience * weights.experience;
    let final_score = amplify(blended, tuning.aggregate.amplify_power);

    let p_red = (final_score + 1.0) / 2.0 * 100.0;
    let p_blue = 100.0 - p_red;

    let confidence = confidence_score(red, blue);
    let analysis = build_analysis(&scores, final_score, confidence, red, blue, tuning);

    PredictionResult {
        fighter1_win_probability: round1(p_red),
        fighter2_win_probability: round1(p_blue),
        confidence_score: confidence,
        breakdown: PillarBreakdown {
            striking_advantage: round2(scores.striking),
            grappling_advantage: round2(scores.grappling),
            biometric_advantage: round2(scores.biometric),
            finish_potential: round2(scores.finish),
            historical_performance: round2(scores.historical),
            experience_advantage: round2(scores.experience),
        },
        analysis,
    }
}

/// Convenience wrapper scoring against today's date with default tuning.
pub fn predict_matchup_now(red: &FighterProfile, blue: &FighterProfile) -> PredictionResult {
    predict_matchup(red, blue, &Tuning::default(), Utc::now().date_naive())
}

/// Share of the sixteen canonical fields populated across both fighters,
/// as an integer percentage. A field counts only when present, non-empty and
/// not the literal "0".
fn confidence_score(red: &FighterProfile, blue: &FighterProfile) -> u8 {
    let filled = f64::from(populated_fields(red) + populated_fields(blue));
    (filled / CENSUS_FIELDS * 100.0).round() as u8
}

fn populated_fields(f: &FighterProfile) -> u32 {
    let stats = f.fighter_stats.as_ref();
    let striking = stats.and_then(|s| s.striking_stats.as_ref());
    let grappling = stats.and_then(|s| s.grappling_stats.as_ref());

    let fields = [
        f.age.as_deref(),
        f.height.as_deref(),
        f.reach.as_deref(),
        stats.and_then(|s| s.sig_strikes_defense.as_deref()),
        striking.and_then(|s| s.sig_strikes_landed_per_min.as_deref()),
        striking.and_then(|s| s.sig_strikes_absorbed_per_min.as_deref()),
        grappling.and_then(|g| g.takedowns_avg_per_15_min.as_deref()),
        f.octagon_debut.as_deref(),
    ];

    fields.iter().filter(|v| populated(**v)).count() as u32
}

fn populated(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}

fn build_analysis(
    scores: &PillarScores,
    final_score: f64,
    confidence: u8,
    red: &FighterProfile,
    blue: &FighterProfile,
    tuning: &Tuning,
) -> FightAnalysis {
    let mut key_factors = Vec::new();

    if scores.striking.abs() > KEY_FACTOR_THRESHOLD {
        key_factors.push(
            if scores.striking > 0.0 {
                "Avantage striking significatif pour le coin rouge"
            } else {
                "Avantage striking significatif pour le coin bleu"
            }
            .to_string(),
        );
    }

    if scores.grappling.abs() > KEY_FACTOR_THRESHOLD {
        key_factors.push(
            if scores.grappling > 0.0 {
                "Domination au sol probable du coin rouge"
            } else {
                "Domination au sol probable du coin bleu"
            }
            .to_string(),
        );
    }

    if scores.biometric.abs() > BIOMETRIC_FACTOR_THRESHOLD {
        key_factors
            .push("Différences physiques importantes entre les combattants".to_string());
    }

    if scores.finish.abs() > KEY_FACTOR_THRESHOLD {
        key_factors.push(
            if scores.finish > 0.0 {
                "Le coin rouge a un meilleur potentiel de finition"
            } else {
                "Le coin bleu a un meilleur potentiel de finition"
            }
            .to_string(),
        );
    }

    if scores.historical.abs() > KEY_FACTOR_THRESHOLD {
        key_factors.push(
            if scores.historical > 0.0 {
                "Le coin rouge possède un meilleur historique de performances"
            } else {
                "Le coin bleu possède un meilleur historique de performances"
            }
            .to_string(),
        );
    }

    let mut warnings = Vec::new();

    if confidence < LOW_CONFIDENCE_FLOOR {
        warnings.push("Données limitées disponibles - prédiction moins fiable".to_string());
    }

    let bio = &tuning.biometric;
    let at_age_risk = |f: &FighterProfile| {
        f.age_years() > bio.age_wall_years && f.weight_lb() < bio.age_wall_weight_lb
    };
    if at_age_risk(red) || at_age_risk(blue) {
        warnings.push("Facteur âge critique pour les catégories légères".to_string());
    }

    let prediction = if final_score.abs() < TOSS_UP_BAND {
        "Combat très serré - Peut aller dans les deux sens"
    } else if final_score > STRONG_EDGE {
        "Victoire probable du coin rouge"
    } else if final_score > TOSS_UP_BAND {
        "Léger avantage pour le coin rouge"
    } else if final_score < -STRONG_EDGE {
        "Victoire probable du coin bleu"
    } else {
        "Léger avantage pour le coin bleu"
    }
    .to_string();

    FightAnalysis {
        key_factors,
        warnings,
        prediction,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
