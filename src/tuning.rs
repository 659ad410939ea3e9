//! Offline-tuned engine constants.
//!
//! The sigmoid scales and amplification powers were fitted against historical
//! cards and the remaining thresholds are empirical picks for the weight
//! classes in the training data. They are configuration, not protocol: pillar
//! logic reads everything from here and hardcodes nothing. The `Default`
//! impls reproduce the shipped values.

#[derive(Debug, Clone, Copy)]
pub struct StrikingTuning {
    pub hit_rate_weight: f64,
    pub damage_ratio_weight: f64,
    pub sigmoid_scale: f64,
    pub amplify_power: f64,
}

impl Default for StrikingTuning {
    fn default() -> Self {
        Self {
            hit_rate_weight: 0.6,
            damage_ratio_weight: 0.4,
            sigmoid_scale: 1.063,
            amplify_power: 1.681,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrapplingTuning {
    pub takedown_weight: f64,
    pub submission_weight: f64,
    /// Takedown threat above this marks a credible wrestler.
    pub fish_threat_floor: f64,
    /// Submission average below this marks a non-threat off the back.
    pub fish_sub_ceiling: f64,
    /// Bonus for a credible wrestler facing a non-submission-threat.
    pub fish_bonus: f64,
    /// Takedown defense at or above this neutralizes the attacker.
    pub elite_defense: f64,
    /// Fraction of takedown threat that survives elite defense.
    pub elite_discount: f64,
    pub sigmoid_scale: f64,
    pub amplify_power: f64,
}

impl Default for GrapplingTuning {
    fn default() -> Self {
        Self {
            takedown_weight: 0.7,
            submission_weight: 0.3,
            fish_threat_floor: 1.0,
            fish_sub_ceiling: 0.5,
            fish_bonus: 0.4,
            elite_defense: 0.90,
            elite_discount: 0.2,
            sigmoid_scale: 1.300,
            amplify_power: 1.850,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BiometricTuning {
    /// Reach gaps at or below this many inches are treated as noise.
    pub reach_noise_in: f64,
    pub reach_scale: f64,
    pub reach_weight: f64,
    pub ape_index_scale: f64,
    pub ape_index_weight: f64,
    /// Age past which decay applies, and only below this weight.
    pub age_wall_years: f64,
    pub age_wall_weight_lb: f64,
    pub age_wall_span: f64,
    pub age_wall_exponent: f64,
    pub age_wall_coeff: f64,
    /// Age gaps beyond this grant the younger fighter a flat edge.
    pub age_gap_years: f64,
    pub age_gap_bonus: f64,
    pub amplify_power: f64,
}

impl Default for BiometricTuning {
    fn default() -> Self {
        Self {
            reach_noise_in: 3.0,
            reach_scale: 0.3,
            reach_weight: 0.6,
            ape_index_scale: 5.0,
            ape_index_weight: 0.4,
            age_wall_years: 35.0,
            age_wall_weight_lb: 170.0,
            age_wall_span: 8.0,
            age_wall_exponent: 2.2,
            age_wall_coeff: 0.5,
            age_gap_years: 5.0,
            age_gap_bonus: 0.3,
            amplify_power: 1.320,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FinishTuning {
    pub ko_gain: f64,
    pub ko_scale: f64,
    pub ko_weight: f64,
    pub sub_gain: f64,
    pub sub_scale: f64,
    pub sub_weight: f64,
    pub early_scale: f64,
    pub early_weight: f64,
    /// Combined finish rate above this vs a decision rate above the floor
    /// below earns the flat pressure bonus.
    pub pressure_finish_floor: f64,
    pub pressure_decision_floor: f64,
    pub pressure_bonus: f64,
    /// KO rate above this vs an opponent absorbing more than the floor
    /// strikes per minute earns the flat chin bonus.
    pub chin_ko_floor: f64,
    pub chin_absorbed_floor: f64,
    pub chin_bonus: f64,
    /// Fallback when no finish-rate data exists on either side: average
    /// fight time under this many minutes reads as a finisher.
    pub pace_finisher_minutes: f64,
    pub pace_bonus: f64,
    pub pace_scale: f64,
    pub pace_weight: f64,
    pub amplify_power: f64,
}

impl Default for FinishTuning {
    fn default() -> Self {
        Self {
            ko_gain: 2.0,
            ko_scale: 1.2,
            ko_weight: 0.45,
            sub_gain: 2.0,
            sub_scale: 1.0,
            sub_weight: 0.25,
            early_scale: 0.5,
            early_weight: 0.20,
            pressure_finish_floor: 0.3,
            pressure_decision_floor: 0.5,
            pressure_bonus: 0.15,
            chin_ko_floor: 0.4,
            chin_absorbed_floor: 4.0,
            chin_bonus: 0.15,
            pace_finisher_minutes: 8.0,
            pace_bonus: 0.2,
            pace_scale: 0.1,
            pace_weight: 0.15,
            amplify_power: 1.196,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HistoricalTuning {
    pub win_rate_gain: f64,
    pub win_rate_scale: f64,
    pub win_rate_weight: f64,
    pub streak_scale: f64,
    pub streak_weight: f64,
    pub title_scale: f64,
    pub title_weight: f64,
    /// More wins than this with a win rate under the ceiling reads as a
    /// padded record and is penalized.
    pub padded_min_wins: u32,
    pub padded_rate_ceiling: f64,
    pub padded_penalty: f64,
    pub amplify_power: f64,
}

impl Default for HistoricalTuning {
    fn default() -> Self {
        Self {
            win_rate_gain: 4.0,
            win_rate_scale: 2.0,
            win_rate_weight: 0.40,
            streak_scale: 0.5,
            streak_weight: 0.35,
            title_scale: 0.6,
            title_weight: 0.25,
            padded_min_wins: 5,
            padded_rate_ceiling: 0.4,
            padded_penalty: 0.2,
            amplify_power: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExperienceTuning {
    /// Under this many years in the octagon reads as a rookie.
    pub rookie_years: f64,
    /// Over this many years reads as a veteran for the shock bonus.
    pub veteran_years: f64,
    pub shock_bonus: f64,
    pub delta_scale: f64,
    pub delta_weight: f64,
    /// Veterans past both limits take the decline penalty.
    pub decline_years: f64,
    pub decline_age: f64,
    pub decline_penalty: f64,
    pub amplify_power: f64,
}

impl Default for ExperienceTuning {
    fn default() -> Self {
        Self {
            rookie_years: 1.5,
            veteran_years: 4.0,
            shock_bonus: 0.4,
            delta_scale: 0.35,
            delta_weight: 0.5,
            decline_years: 9.0,
            decline_age: 35.0,
            decline_penalty: 0.25,
            amplify_power: 1.116,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AggregateTuning {
    /// Second, final stretch applied to the blended score, distinct from the
    /// per-pillar amplification.
    pub amplify_power: f64,
    /// Pillar magnitudes below this count as "no signal" and have their
    /// weight redistributed.
    pub dead_pillar_epsilon: f64,
    pub redistribute_striking: f64,
    pub redistribute_grappling: f64,
    pub redistribute_finish: f64,
}

impl Default for AggregateTuning {
    fn default() -> Self {
        Self {
            amplify_power: 1.63,
            dead_pillar_epsilon: 0.001,
            redistribute_striking: 0.40,
            redistribute_grappling: 0.35,
            redistribute_finish: 0.25,
        }
    }
}

/// The full tuning table for one engine invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuning {
    pub striking: StrikingTuning,
    pub grappling: GrapplingTuning,
    pub biometric: BiometricTuning,
    pub finish: FinishTuning,
    pub historical: HistoricalTuning,
    pub experience: ExperienceTuning,
    pub aggregate: AggregateTuning,
}
