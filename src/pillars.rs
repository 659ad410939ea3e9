//! The six pillar calculators.
//!
//! Each one compares the two fighters on a single axis and returns a signed
//! score in [-1, 1]: positive favors the red corner (fighter 1), negative the
//! blue corner. That sign convention holds for every pillar without
//! exception. A pillar whose inputs are entirely missing on both sides scores
//! exactly 0 so the aggregator can redistribute its weight.

use chrono::NaiveDate;

use crate::numeric::{amplify, sigmoid};
use crate::profile::FighterProfile;
use crate::tuning::{
    BiometricTuning, ExperienceTuning, FinishTuning, GrapplingTuning, HistoricalTuning,
    StrikingTuning, Tuning,
};

/// All six pillar scores for one matchup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PillarScores {
    pub striking: f64,
    pub grappling: f64,
    pub biometric: f64,
    pub finish: f64,
    pub historical: f64,
    pub experience: f64,
}

pub fn compute_pillars(
    red: &FighterProfile,
    blue: &FighterProfile,
    tuning: &Tuning,
    now: NaiveDate,
) -> PillarScores {
    PillarScores {
        striking: striking_advantage(red, blue, &tuning.striking),
        grappling: grappling_advantage(red, blue, &tuning.grappling),
        biometric: biometric_advantage(red, blue, &tuning.biometric),
        finish: finish_potential(red, blue, &tuning.finish),
        historical: historical_performance(red, blue, &tuning.historical),
        experience: experience_advantage(red, blue, &tuning.experience, now),
    }
}

/// Effective striking: volume through the opponent's guard, weighed against
/// the landed/absorbed damage ratio.
pub fn striking_advantage(f1: &FighterProfile, f2: &FighterProfile, t: &StrikingTuning) -> f64 {
    let f1_landed = f1.strikes_landed_per_min();
    let f2_landed = f2.strikes_landed_per_min();
    if f1_landed == 0.0 && f2_landed == 0.0 {
        return 0.0;
    }

    let f1_absorbed = f1.strikes_absorbed_per_min();
    let f2_absorbed = f2.strikes_absorbed_per_min();

    let f1_hit_rate = f1_landed * (1.0 - f2.strike_defense());
    let f2_hit_rate = f2_landed * (1.0 - f1.strike_defense());

    let f1_damage = if f1_absorbed > 0.0 {
        f1_landed / f1_absorbed
    } else {
        f1_landed
    };
    let f2_damage = if f2_absorbed > 0.0 {
        f2_landed / f2_absorbed
    } else {
        f2_landed
    };

    let raw = (f1_hit_rate - f2_hit_rate) * t.hit_rate_weight
        + (f1_damage - f2_damage) * t.damage_ratio_weight;

    amplify(sigmoid(raw, t.sigmoid_scale), t.amplify_power)
}

/// Grappling dominance: takedown threat through the opponent's defense, the
/// fish-out-of-water bonus for wrestlers facing no submission threat, and the
/// near-total discount against elite takedown defense.
pub fn grappling_advantage(f1: &FighterProfile, f2: &FighterProfile, t: &GrapplingTuning) -> f64 {
    let f1_td = f1.takedowns_per_15();
    let f2_td = f2.takedowns_per_15();
    if f1_td == 0.0 && f2_td == 0.0 {
        return 0.0;
    }

    let f1_td_defense = f1.takedown_defense();
    let f2_td_defense = f2.takedown_defense();
    let f1_subs = f1.submissions_per_15();
    let f2_subs = f2.submissions_per_15();

    let f1_threat = f1_td * (1.0 - f2_td_defense);
    let f2_threat = f2_td * (1.0 - f1_td_defense);

    let f1_bonus = if f1_threat > t.fish_threat_floor && f2_subs < t.fish_sub_ceiling {
        t.fish_bonus
    } else {
        0.0
    };
    let f2_bonus = if f2_threat > t.fish_threat_floor && f1_subs < t.fish_sub_ceiling {
        t.fish_bonus
    } else {
        0.0
    };

    let f1_effective = if f2_td_defense >= t.elite_defense {
        f1_threat * t.elite_discount
    } else {
        f1_threat
    };
    let f2_effective = if f1_td_defense >= t.elite_defense {
        f2_threat * t.elite_discount
    } else {
        f2_threat
    };

    let td_delta = (f1_effective - f2_effective) + (f1_bonus - f2_bonus);
    let raw = td_delta * t.takedown_weight + (f1_subs - f2_subs) * t.submission_weight;

    amplify(sigmoid(raw, t.sigmoid_scale), t.amplify_power)
}

/// Physical comparison: reach (past the noise gate), ape index, the age wall
/// for lighter fighters, and a flat edge for a much younger fighter.
pub fn biometric_advantage(f1: &FighterProfile, f2: &FighterProfile, t: &BiometricTuning) -> f64 {
    let f1_height = f1.height_in();
    let f2_height = f2.height_in();
    let f1_reach = f1.reach_in();
    let f2_reach = f2.reach_in();
    let f1_age = f1.age_years();
    let f2_age = f2.age_years();

    let mut score = 0.0;

    let reach_delta = f1_reach - f2_reach;
    if reach_delta.abs() > t.reach_noise_in {
        score += sigmoid(reach_delta, t.reach_scale) * t.reach_weight;
    }

    let f1_ape = if f1_height > 0.0 { f1_reach / f1_height } else { 1.0 };
    let f2_ape = if f2_height > 0.0 { f2_reach / f2_height } else { 1.0 };
    score += sigmoid(f1_ape - f2_ape, t.ape_index_scale) * t.ape_index_weight;

    let age_penalty = |age: f64, weight: f64| {
        if age > t.age_wall_years && weight < t.age_wall_weight_lb {
            ((age - t.age_wall_years) / t.age_wall_span).powf(t.age_wall_exponent)
                * -t.age_wall_coeff
        } else {
            0.0
        }
    };
    let f1_penalty = age_penalty(f1_age, f1.weight_lb());
    let f2_penalty = age_penalty(f2_age, f2.weight_lb());
    score += f1_penalty - f2_penalty;

    if (f1_age - f2_age).abs() > t.age_gap_years {
        score += if f1_age < f2_age {
            t.age_gap_bonus
        } else {
            -t.age_gap_bonus
        };
    }

    amplify(score.clamp(-1.0, 1.0), t.amplify_power)
}

/// Finishing ability from KO/submission/early-finish rates, with flat
/// bonuses for finishers facing decision-prone or damage-absorbing
/// opponents. Falls back to average fight time as a tendency proxy when
/// neither fighter has any finish-rate data.
pub fn finish_potential(f1: &FighterProfile, f2: &FighterProfile, t: &FinishTuning) -> f64 {
    let f1_ko = f1.ko_wins().rate;
    let f2_ko = f2.ko_wins().rate;
    let f1_sub = f1.submission_wins().rate;
    let f2_sub = f2.submission_wins().rate;
    let f1_dec = f1.decision_wins().rate;
    let f2_dec = f2.decision_wins().rate;

    let mut score = 0.0;

    if f1_ko > 0.0 || f2_ko > 0.0 {
        score += sigmoid((f1_ko - f2_ko) * t.ko_gain, t.ko_scale) * t.ko_weight;
    }

    if f1_sub > 0.0 || f2_sub > 0.0 {
        score += sigmoid((f1_sub - f2_sub) * t.sub_gain, t.sub_scale) * t.sub_weight;
    }

    let f1_early = f1.first_round_finishes();
    let f2_early = f2.first_round_finishes();
    if f1_early > 0.0 || f2_early > 0.0 {
        score += sigmoid(f1_early - f2_early, t.early_scale) * t.early_weight;
    }

    // A finisher against someone who always hears the scorecards.
    if f1_ko + f1_sub > t.pressure_finish_floor && f2_dec > t.pressure_decision_floor {
        score += t.pressure_bonus;
    }
    if f2_ko + f2_sub > t.pressure_finish_floor && f1_dec > t.pressure_decision_floor {
        score -= t.pressure_bonus;
    }

    // Heavy hands against a fighter who absorbs a lot of volume.
    if f1_ko > t.chin_ko_floor && f2.strikes_absorbed_per_min() > t.chin_absorbed_floor {
        score += t.chin_bonus;
    }
    if f2_ko > t.chin_ko_floor && f1.strikes_absorbed_per_min() > t.chin_absorbed_floor {
        score -= t.chin_bonus;
    }

    // No finish-rate data at all: read tendency off the clock instead.
    if f1_ko == 0.0 && f2_ko == 0.0 && f1_sub == 0.0 && f2_sub == 0.0 {
        let f1_time = f1.avg_fight_minutes();
        let f2_time = f2.avg_fight_minutes();
        let f1_finisher = f1_time < t.pace_finisher_minutes;
        let f2_finisher = f2_time < t.pace_finisher_minutes;

        if f1_finisher && !f2_finisher {
            score += t.pace_bonus;
        }
        if f2_finisher && !f1_finisher {
            score -= t.pace_bonus;
        }
        score += sigmoid(f2_time - f1_time, t.pace_scale) * t.pace_weight;
    }

    amplify(score.clamp(-1.0, 1.0), t.amplify_power)
}

/// Career record quality: win rate, active streak, title pedigree, and a
/// penalty for padded records. Always computed for the breakdown even though
/// its default aggregate weight is zero.
pub fn historical_performance(
    f1: &FighterProfile,
    f2: &FighterProfile,
    t: &HistoricalTuning,
) -> f64 {
    let f1_record = f1.record();
    let f2_record = f2.record();

    let mut score = 0.0;

    if f1_record.wins > 0 || f2_record.wins > 0 {
        let delta = f1_record.win_rate - f2_record.win_rate;
        score += sigmoid(delta * t.win_rate_gain, t.win_rate_scale) * t.win_rate_weight;
    }

    let f1_streak = f1.win_streak();
    let f2_streak = f2.win_streak();
    if f1_streak > 0.0 || f2_streak > 0.0 {
        score += sigmoid(f1_streak - f2_streak, t.streak_scale) * t.streak_weight;
    }

    let f1_titles = f1.title_defenses();
    let f2_titles = f2.title_defenses();
    if f1_titles > 0.0 || f2_titles > 0.0 {
        score += sigmoid(f1_titles - f2_titles, t.title_scale) * t.title_weight;
    }

    // Many wins against weak opposition still shows in the loss column.
    if f1_record.wins > t.padded_min_wins && f1_record.win_rate < t.padded_rate_ceiling {
        score -= t.padded_penalty;
    }
    if f2_record.wins > t.padded_min_wins && f2_record.win_rate < t.padded_rate_ceiling {
        score += t.padded_penalty;
    }

    amplify(score.clamp(-1.0, 1.0), t.amplify_power)
}

/// Octagon experience relative to `now`: rookie-vs-veteran shock, the
/// continuous experience delta, and decline for aged long-tenured veterans.
/// Requires both debut dates; otherwise there is no signal.
pub fn experience_advantage(
    f1: &FighterProfile,
    f2: &FighterProfile,
    t: &ExperienceTuning,
    now: NaiveDate,
) -> f64 {
    let (Some(f1_debut), Some(f2_debut)) = (f1.debut_date(), f2.debut_date()) else {
        return 0.0;
    };

    let years_since = |debut: NaiveDate| (now - debut).num_days() as f64 / 365.0;
    let f1_years = years_since(f1_debut);
    let f2_years = years_since(f2_debut);

    let mut score = 0.0;

    if f2_years < t.rookie_years && f1_years > t.veteran_years {
        score += t.shock_bonus;
    }
    if f1_years < t.rookie_years && f2_years > t.veteran_years {
        score -= t.shock_bonus;
    }

    score += sigmoid(f1_years - f2_years, t.delta_scale) * t.delta_weight;

    let f1_age = f1.age_years();
    let f2_age = f2.age_years();
    if f1_years > t.decline_years && f1_age > t.decline_age {
        score -= t.decline_penalty;
    }
    if f2_years > t.decline_years && f2_age > t.decline_age {
        score += t.decline_penalty;
    }

    amplify(score.clamp(-1.0, 1.0), t.amplify_power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{FighterRecords, FighterStatBlock, GrapplingStats, StrikingStats};

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn grappler(td: &str, td_def: &str, subs: &str) -> FighterProfile {
        FighterProfile {
            fighter_stats: Some(FighterStatBlock {
                takedown_defense: s(td_def),
                grappling_stats: Some(GrapplingStats {
                    takedowns_avg_per_15_min: s(td),
                    submission_avg_per_15_min: s(subs),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn striker(landed: &str, absorbed: &str, defense: &str) -> FighterProfile {
        FighterProfile {
            fighter_stats: Some(FighterStatBlock {
                sig_strikes_defense: s(defense),
                striking_stats: Some(StrikingStats {
                    sig_strikes_landed_per_min: s(landed),
                    sig_strikes_absorbed_per_min: s(absorbed),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn fight_night() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 13).unwrap()
    }

    #[test]
    fn striking_needs_some_volume_data() {
        let t = StrikingTuning::default();
        let empty = FighterProfile::default();
        assert_eq!(striking_advantage(&empty, &empty, &t), 0.0);
        // One-sided data is still a signal.
        let active = striker("4.5", "2.0", "60");
        assert!(striking_advantage(&active, &empty, &t) > 0.0);
    }

    #[test]
    fn better_volume_and_defense_wins_striking() {
        let t = StrikingTuning::default();
        let sharp = striker("5.5", "2.1", "62");
        let hittable = striker("3.0", "4.8", "44");
        let score = striking_advantage(&sharp, &hittable, &t);
        assert!(score > 0.2, "expected clear edge, got {score}");
        assert!(score <= 1.0);
    }

    #[test]
    fn fish_out_of_water_bonus_rewards_pure_wrestlers() {
        let t = GrapplingTuning::default();
        let wrestler = grappler("4.0", "70", "0.3");
        let no_subs = grappler("0.5", "50", "0.1");
        let with_subs = grappler("0.5", "50", "2.0");
        // Same wrestler scores higher against the opponent with no
        // submission game off the back.
        let easy = grappling_advantage(&wrestler, &no_subs, &t);
        let hard = grappling_advantage(&wrestler, &with_subs, &t);
        assert!(easy > hard);
    }

    #[test]
    fn elite_takedown_defense_neutralizes_the_threat() {
        let t = GrapplingTuning::default();
        let wrestler = grappler("5.0", "0", "0.9");
        let wall = grappler("0.2", "95", "0.9");

        let score = grappling_advantage(&wrestler, &wall, &t);

        // Raw threat 5.0 * (1 - 0.95) = 0.25, then discounted to 20%.
        let f1_effective = 5.0 * (1.0 - 0.95) * t.elite_discount;
        let f2_effective = 0.2 * 1.0;
        let raw = (f1_effective - f2_effective) * t.takedown_weight;
        let expected = amplify(sigmoid(raw, t.sigmoid_scale), t.amplify_power);
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn reach_gaps_inside_noise_gate_are_ignored() {
        let t = BiometricTuning::default();
        let long = FighterProfile {
            reach: s("74"),
            ..Default::default()
        };
        let short = FighterProfile {
            reach: s("72"),
            ..Default::default()
        };
        // Two inches is noise, and with no heights listed both ape indexes
        // sit at the default ratio, so no signal remains.
        assert_eq!(biometric_advantage(&long, &short, &t), 0.0);

        let much_longer = FighterProfile {
            reach: s("79"),
            ..Default::default()
        };
        assert!(biometric_advantage(&much_longer, &short, &t) > 0.0);
    }

    #[test]
    fn age_wall_only_applies_to_lighter_fighters() {
        let t = BiometricTuning::default();
        let aging_lightweight = FighterProfile {
            age: s("38"),
            weight: s("155"),
            ..Default::default()
        };
        let aging_heavyweight = FighterProfile {
            age: s("38"),
            weight: s("250"),
            ..Default::default()
        };
        let peer = FighterProfile {
            age: s("37"),
            weight: s("155"),
            ..Default::default()
        };
        // The lightweight takes the decay penalty; the heavyweight does not.
        assert!(biometric_advantage(&aging_lightweight, &peer, &t) < 0.0);
        let heavy_peer = FighterProfile {
            age: s("37"),
            weight: s("250"),
            ..Default::default()
        };
        assert_eq!(biometric_advantage(&aging_heavyweight, &heavy_peer, &t), 0.0);
    }

    #[test]
    fn big_age_gap_favors_the_younger_fighter() {
        let t = BiometricTuning::default();
        let young = FighterProfile {
            age: s("26"),
            ..Default::default()
        };
        let old = FighterProfile {
            age: s("33"),
            ..Default::default()
        };
        assert!(biometric_advantage(&young, &old, &t) > 0.0);
        assert!(biometric_advantage(&old, &young, &t) < 0.0);
    }

    #[test]
    fn finish_falls_back_to_fight_time_without_records() {
        let t = FinishTuning::default();
        let quick = FighterProfile {
            fighter_stats: Some(FighterStatBlock {
                avg_fight_time: s("4:30"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let grinder = FighterProfile {
            fighter_stats: Some(FighterStatBlock {
                avg_fight_time: s("14:10"),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(finish_potential(&quick, &grinder, &t) > 0.0);
    }

    #[test]
    fn ko_rate_dominates_finish_with_records() {
        let t = FinishTuning::default();
        let slugger = FighterProfile {
            records: Some(FighterRecords {
                wins_by_knockout: s("15 (75%)"),
                first_round_finishes: s("9"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let decider = FighterProfile {
            records: Some(FighterRecords {
                wins_by_knockout: s("2 (12%)"),
                wins_by_decision: s("11 (69%)"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let score = finish_potential(&slugger, &decider, &t);
        assert!(score > 0.3, "expected strong finish edge, got {score}");
    }

    #[test]
    fn padded_records_get_penalized() {
        let t = HistoricalTuning::default();
        let padded = FighterProfile {
            records: Some(FighterRecords {
                wld: s("8-14-0 (W-L-D)"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let honest = FighterProfile {
            records: Some(FighterRecords {
                wld: s("8-6-0 (W-L-D)"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let score = historical_performance(&padded, &honest, &t);
        assert!(score < 0.0);
    }

    #[test]
    fn experience_needs_both_debut_dates() {
        let t = ExperienceTuning::default();
        let veteran = FighterProfile {
            octagon_debut: s("Apr. 6, 2013"),
            ..Default::default()
        };
        let unknown = FighterProfile::default();
        assert_eq!(
            experience_advantage(&veteran, &unknown, &t, fight_night()),
            0.0
        );
        assert_eq!(
            experience_advantage(&unknown, &veteran, &t, fight_night()),
            0.0
        );
    }

    #[test]
    fn rookie_shock_boosts_the_veteran() {
        let t = ExperienceTuning::default();
        let veteran = FighterProfile {
            octagon_debut: s("Apr. 6, 2013"),
            ..Default::default()
        };
        let rookie = FighterProfile {
            octagon_debut: s("Feb. 1, 2026"),
            ..Default::default()
        };
        let score = experience_advantage(&veteran, &rookie, &t, fight_night());
        assert!(score > 0.5, "shock bonus plus delta should dominate: {score}");
        let flipped = experience_advantage(&rookie, &veteran, &t, fight_night());
        assert!((score + flipped).abs() < 1e-9);
    }

    #[test]
    fn veteran_decline_penalty_needs_age_and_tenure() {
        let t = ExperienceTuning::default();
        let old_veteran = FighterProfile {
            age: s("38"),
            octagon_debut: s("Jan. 15, 2010"),
            ..Default::default()
        };
        let fresh_veteran = FighterProfile {
            age: s("31"),
            octagon_debut: s("Jan. 15, 2010"),
            ..Default::default()
        };
        // Same tenure either side, so only the decline penalty separates them.
        let score = experience_advantage(&old_veteran, &fresh_veteran, &t, fight_night());
        assert!(score < 0.0);
    }
}
