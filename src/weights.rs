//! Pillar weighting: style classification, style-dependent presets, and
//! adaptive redistribution away from pillars with no usable signal.

use crate::pillars::PillarScores;
use crate::tuning::AggregateTuning;

/// Closed classification of the free-text fighting-style label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Striker,
    Grappler,
    /// No vocabulary match; such fighters fall through to the base weights.
    Unclassified,
}

const STRIKER_VOCAB: [&str; 4] = ["striker", "boxing", "kickbox", "muay"];
const GRAPPLER_VOCAB: [&str; 4] = ["wrestler", "grappler", "jiu-jitsu", "sambo"];

/// Case-insensitive substring match against the two style vocabularies.
/// A label matching both (e.g. "Wrestler / Striker") classifies as grappler.
pub fn classify_style(label: Option<&str>) -> StyleClass {
    let Some(label) = label else {
        return StyleClass::Unclassified;
    };
    let label = label.to_lowercase();
    if GRAPPLER_VOCAB.iter().any(|v| label.contains(v)) {
        return StyleClass::Grappler;
    }
    if STRIKER_VOCAB.iter().any(|v| label.contains(v)) {
        return StyleClass::Striker;
    }
    StyleClass::Unclassified
}

/// One nonnegative weight per pillar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarWeights {
    pub striking: f64,
    pub grappling: f64,
    pub biometric: f64,
    pub finish: f64,
    pub historical: f64,
    pub experience: f64,
}

impl PillarWeights {
    /// Grid-searched base weights; sum to 1.0. The historical pillar is
    /// computed and reported but carries no aggregate weight by default.
    pub fn base() -> Self {
        Self {
            striking: 0.280,
            grappling: 0.300,
            biometric: 0.132,
            finish: 0.200,
            historical: 0.000,
            experience: 0.088,
        }
    }

    /// Preset for a pure striking matchup.
    pub fn striker_heavy() -> Self {
        Self {
            striking: 0.40,
            grappling: 0.08,
            biometric: 0.15,
            finish: 0.18,
            historical: 0.15,
            experience: 0.04,
        }
    }

    /// Preset for a pure grappling matchup.
    pub fn grappler_heavy() -> Self {
        Self {
            striking: 0.15,
            grappling: 0.40,
            biometric: 0.05,
            finish: 0.18,
            historical: 0.18,
            experience: 0.04,
        }
    }

    pub fn sum(&self) -> f64 {
        self.striking
            + self.grappling
            + self.biometric
            + self.finish
            + self.historical
            + self.experience
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self::base()
    }
}

/// Picks the weight set for a matchup: the style presets apply only when
/// both corners classify into the same camp.
pub fn select_weights(red: StyleClass, blue: StyleClass) -> PillarWeights {
    match (red, blue) {
        (StyleClass::Striker, StyleClass::Striker) => PillarWeights::striker_heavy(),
        (StyleClass::Grappler, StyleClass::Grappler) => PillarWeights::grappler_heavy(),
        _ => PillarWeights::base(),
    }
}

/// Zeroes the weight of the data-dependent pillars (biometric, experience)
/// when their score shows no signal, and routes the freed weight to the three
/// core pillars. Striking, grappling and finish always keep a signal path,
/// and historical already carries zero base weight, so none of those are ever
/// disabled here.
pub fn redistribute_dead_weight(
    mut weights: PillarWeights,
    scores: &PillarScores,
    agg: &AggregateTuning,
) -> PillarWeights {
    let mut freed = 0.0;

    if scores.biometric.abs() < agg.dead_pillar_epsilon {
        freed += weights.biometric;
        weights.biometric = 0.0;
    }
    if scores.experience.abs() < agg.dead_pillar_epsilon {
        freed += weights.experience;
        weights.experience = 0.0;
    }

    if freed > 0.0 {
        weights.striking += freed * agg.redistribute_striking;
        weights.grappling += freed * agg.redistribute_grappling;
        weights.finish += freed * agg.redistribute_finish;
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(biometric: f64, experience: f64) -> PillarScores {
        PillarScores {
            striking: 0.3,
            grappling: -0.2,
            biometric,
            finish: 0.1,
            historical: 0.05,
            experience,
        }
    }

    #[test]
    fn classify_matches_vocabularies_case_insensitively() {
        assert_eq!(classify_style(Some("Striker")), StyleClass::Striker);
        assert_eq!(classify_style(Some("Muay Thai")), StyleClass::Striker);
        assert_eq!(classify_style(Some("KICKBOXING")), StyleClass::Striker);
        assert_eq!(classify_style(Some("Wrestler")), StyleClass::Grappler);
        assert_eq!(classify_style(Some("Brazilian Jiu-Jitsu")), StyleClass::Grappler);
        assert_eq!(classify_style(Some("Freestyle")), StyleClass::Unclassified);
        assert_eq!(classify_style(None), StyleClass::Unclassified);
    }

    #[test]
    fn dual_labels_classify_as_grappler() {
        assert_eq!(classify_style(Some("Wrestler / Striker")), StyleClass::Grappler);
    }

    #[test]
    fn presets_sum_to_one() {
        assert!((PillarWeights::base().sum() - 1.0).abs() < 1e-12);
        assert!((PillarWeights::striker_heavy().sum() - 1.0).abs() < 1e-12);
        assert!((PillarWeights::grappler_heavy().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn presets_require_matching_camps() {
        assert_eq!(
            select_weights(StyleClass::Striker, StyleClass::Striker),
            PillarWeights::striker_heavy()
        );
        assert_eq!(
            select_weights(StyleClass::Grappler, StyleClass::Grappler),
            PillarWeights::grappler_heavy()
        );
        assert_eq!(
            select_weights(StyleClass::Striker, StyleClass::Grappler),
            PillarWeights::base()
        );
        assert_eq!(
            select_weights(StyleClass::Unclassified, StyleClass::Striker),
            PillarWeights::base()
        );
    }

    #[test]
    fn dead_pillars_feed_the_core_three() {
        let agg = AggregateTuning::default();
        let out = redistribute_dead_weight(PillarWeights::base(), &scores(0.0, 0.0), &agg);

        assert_eq!(out.biometric, 0.0);
        assert_eq!(out.experience, 0.0);
        let freed = 0.132 + 0.088;
        assert!((out.striking - (0.280 + freed * 0.40)).abs() < 1e-12);
        assert!((out.grappling - (0.300 + freed * 0.35)).abs() < 1e-12);
        assert!((out.finish - (0.200 + freed * 0.25)).abs() < 1e-12);
        // Total weight is conserved.
        assert!((out.sum() - PillarWeights::base().sum()).abs() < 1e-12);
    }

    #[test]
    fn live_pillars_keep_their_weight() {
        let agg = AggregateTuning::default();
        let out = redistribute_dead_weight(PillarWeights::base(), &scores(0.2, -0.4), &agg);
        assert_eq!(out, PillarWeights::base());
    }
}
