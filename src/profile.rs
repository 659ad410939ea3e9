//! Fighter profile records as delivered by the upstream stats scraper.
//!
//! Every field is optional and arrives as a loosely formatted string; the
//! accessors below funnel them through the tolerant parsers so the scoring
//! pipeline only ever sees numbers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::parse::{
    estimate_leg_reach, parse_debut_date, parse_fight_time, parse_finish_rate, parse_num,
    parse_record, FightRecord, FinishRate,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterProfile {
    pub name: Option<String>,
    pub profile_url: Option<String>,
    pub status: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub octagon_debut: Option<String>,
    pub reach: Option<String>,
    pub leg_reach: Option<String>,
    pub fighting_style: Option<String>,
    pub trains_at: Option<String>,
    pub records: Option<FighterRecords>,
    pub fighter_stats: Option<FighterStatBlock>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterRecords {
    /// "24-5-0 (W-L-D)"
    pub wld: Option<String>,
    /// "16 (67%)"
    pub wins_by_knockout: Option<String>,
    pub wins_by_submission: Option<String>,
    pub wins_by_decision: Option<String>,
    pub fight_win_streak: Option<String>,
    pub first_round_finishes: Option<String>,
    pub title_defenses: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterStatBlock {
    pub sig_strikes_defense: Option<String>,
    pub takedown_defense: Option<String>,
    /// "MM:SS"
    pub avg_fight_time: Option<String>,
    // The scraper spells this key "strinking_stats"; keep the wire name.
    #[serde(rename = "strinking_stats")]
    pub striking_stats: Option<StrikingStats>,
    pub grappling_stats: Option<GrapplingStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikingStats {
    pub sig_strikes_landed_per_min: Option<String>,
    pub sig_strikes_absorbed_per_min: Option<String>,
    pub sig_str_by_target: Option<StrikeTargets>,
}

/// Per-target strike distribution. Carried through for display layers; the
/// pillar calculators do not consume it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikeTargets {
    pub head: Option<String>,
    pub body: Option<String>,
    pub leg: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrapplingStats {
    pub takedowns_avg_per_15_min: Option<String>,
    pub submission_avg_per_15_min: Option<String>,
}

/// One fight of a card: red corner vs blue corner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matchup {
    pub red: FighterProfile,
    pub blue: FighterProfile,
}

impl FighterProfile {
    fn striking(&self) -> Option<&StrikingStats> {
        self.fighter_stats.as_ref()?.striking_stats.as_ref()
    }

    fn grappling(&self) -> Option<&GrapplingStats> {
        self.fighter_stats.as_ref()?.grappling_stats.as_ref()
    }

    fn record_field(&self, pick: impl Fn(&FighterRecords) -> Option<&String>) -> Option<&str> {
        self.records.as_ref().and_then(|r| pick(r).map(String::as_str))
    }

    pub fn age_years(&self) -> f64 {
        parse_num(self.age.as_deref())
    }

    pub fn height_in(&self) -> f64 {
        parse_num(self.height.as_deref())
    }

    pub fn weight_lb(&self) -> f64 {
        parse_num(self.weight.as_deref())
    }

    pub fn reach_in(&self) -> f64 {
        parse_num(self.reach.as_deref())
    }

    /// Listed leg reach, falling back to the anthropometric estimate when the
    /// field is missing or zero.
    pub fn leg_reach_in(&self) -> f64 {
        let listed = parse_num(self.leg_reach.as_deref());
        if listed > 0.0 {
            listed
        } else {
            estimate_leg_reach(self.height_in())
        }
    }

    /// Significant-strike defense as a fraction in [0, 1].
    pub fn strike_defense(&self) -> f64 {
        let pct = self
            .fighter_stats
            .as_ref()
            .and_then(|s| s.sig_strikes_defense.as_deref());
        parse_num(pct) / 100.0
    }

    pub fn strikes_landed_per_min(&self) -> f64 {
        parse_num(self.striking().and_then(|s| s.sig_strikes_landed_per_min.as_deref()))
    }

    pub fn strikes_absorbed_per_min(&self) -> f64 {
        parse_num(self.striking().and_then(|s| s.sig_strikes_absorbed_per_min.as_deref()))
    }

    /// Takedown defense as a fraction in [0, 1].
    pub fn takedown_defense(&self) -> f64 {
        let pct = self
            .fighter_stats
            .as_ref()
            .and_then(|s| s.takedown_defense.as_deref());
        parse_num(pct) / 100.0
    }

    pub fn takedowns_per_15(&self) -> f64 {
        parse_num(self.grappling().and_then(|g| g.takedowns_avg_per_15_min.as_deref()))
    }

    pub fn submissions_per_15(&self) -> f64 {
        parse_num(self.grappling().and_then(|g| g.submission_avg_per_15_min.as_deref()))
    }

    /// Average fight length in decimal minutes.
    pub fn avg_fight_minutes(&self) -> f64 {
        parse_fight_time(
            self.fighter_stats
                .as_ref()
                .and_then(|s| s.avg_fight_time.as_deref()),
        )
    }

    pub fn record(&self) -> FightRecord {
        parse_record(self.record_field(|r| r.wld.as_ref()))
    }

    pub fn ko_wins(&self) -> FinishRate {
        parse_finish_rate(self.record_field(|r| r.wins_by_knockout.as_ref()))
    }

    pub fn submission_wins(&self) -> FinishRate {
        parse_finish_rate(self.record_field(|r| r.wins_by_submission.as_ref()))
    }

    pub fn decision_wins(&self) -> FinishRate {
        parse_finish_rate(self.record_field(|r| r.wins_by_decision.as_ref()))
    }

    pub fn win_streak(&self) -> f64 {
        parse_num(self.record_field(|r| r.fight_win_streak.as_ref()))
    }

    pub fn first_round_finishes(&self) -> f64 {
        parse_num(self.record_field(|r| r.first_round_finishes.as_ref()))
    }

    pub fn title_defenses(&self) -> f64 {
        parse_num(self.record_field(|r| r.title_defenses.as_ref()))
    }

    pub fn debut_date(&self) -> Option<NaiveDate> {
        parse_debut_date(self.octagon_debut.as_deref())
    }
}
