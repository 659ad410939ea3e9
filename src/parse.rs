//! Tolerant parsers for the loosely-typed stat strings the upstream scraper
//! emits. Every parser is total: malformed or missing input maps to zero (or
//! `None` for dates), never an error.

use chrono::NaiveDate;

/// Win-loss-draw record extracted from a `"24-5-0 (W-L-D)"` style string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FightRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_rate: f64,
}

/// Finish count plus rate from a `"16 (67%)"` style string.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinishRate {
    pub count: u32,
    /// Fraction in [0, 1], not a percentage.
    pub rate: f64,
}

/// Leading-prefix numeric parse. Values arrive with unit suffixes
/// (`72"`, `67 %`, `24-5-0`), so only the longest leading decimal prefix
/// counts, and anything unparsable is zero.
pub fn parse_num(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

/// Extracts the first `W-L-D` integer triple found anywhere in the string.
pub fn parse_record(raw: Option<&str>) -> FightRecord {
    let Some(raw) = raw else {
        return FightRecord::default();
    };
    for token in raw.split(|c: char| !c.is_ascii_digit() && c != '-') {
        let parts: Vec<&str> = token.split('-').collect();
        for window in parts.windows(3) {
            let (Ok(wins), Ok(losses), Ok(draws)) = (
                window[0].parse::<u32>(),
                window[1].parse::<u32>(),
                window[2].parse::<u32>(),
            ) else {
                continue;
            };
            let total = wins + losses + draws;
            let win_rate = if total > 0 {
                f64::from(wins) / f64::from(total)
            } else {
                0.0
            };
            return FightRecord {
                wins,
                losses,
                draws,
                win_rate,
            };
        }
    }
    FightRecord::default()
}

/// Parses a finish string like `"16 (67%)"` or `"0 (0 %)"`. The leading
/// count and the parenthesized percentage are independent; either may be
/// absent and defaults to zero.
pub fn parse_finish_rate(raw: Option<&str>) -> FinishRate {
    let Some(raw) = raw else {
        return FinishRate::default();
    };
    let count = raw
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse::<u32>()
        .unwrap_or(0);
    FinishRate {
        count,
        rate: percent_in_parens(raw),
    }
}

fn percent_in_parens(raw: &str) -> f64 {
    for (open, _) in raw.char_indices().filter(|(_, c)| *c == '(') {
        let rest = &raw[open + 1..];
        let mut end = rest
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if end == 0 {
            continue;
        }
        let tail = &rest.as_bytes()[end..];
        if tail.first() == Some(&b'.') {
            let frac = tail[1..].iter().take_while(|b| b.is_ascii_digit()).count();
            if frac > 0 {
                end += 1 + frac;
            }
        }
        let after = rest[end..].trim_start();
        if let Some(stripped) = after.strip_prefix('%') {
            if stripped.starts_with(')') {
                if let Ok(v) = rest[..end].parse::<f64>() {
                    return v / 100.0;
                }
            }
        }
    }
    0.0
}

/// Converts an `"MM:SS"` fight time into decimal minutes. Anything that is
/// not exactly two colon-separated parts is zero.
pub fn parse_fight_time(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 2 {
        return 0.0;
    }
    parse_num(Some(parts[0])) + parse_num(Some(parts[1])) / 60.0
}

const DEBUT_DATE_FORMATS: [&str; 5] = [
    // The scraper emits abbreviated months like "Jul. 10, 2016".
    "%b. %d, %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%m/%d/%Y",
    "%Y-%m-%d",
];

/// Best-effort calendar date parse for octagon debuts. An unparseable date
/// is `None`, which disables the experience pillar rather than erroring.
pub fn parse_debut_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DEBUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Anthropometric fallback when leg reach is missing from a profile.
pub fn estimate_leg_reach(height: f64) -> f64 {
    height * 0.48
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_num_takes_leading_prefix() {
        assert_eq!(parse_num(Some("72")), 72.0);
        assert_eq!(parse_num(Some("72\"")), 72.0);
        assert_eq!(parse_num(Some("67 %")), 67.0);
        assert_eq!(parse_num(Some("3.5")), 3.5);
        assert_eq!(parse_num(Some("-2")), -2.0);
        assert_eq!(parse_num(Some("  14")), 14.0);
        assert_eq!(parse_num(Some(".5")), 0.5);
    }

    #[test]
    fn parse_num_defaults_to_zero() {
        assert_eq!(parse_num(None), 0.0);
        assert_eq!(parse_num(Some("")), 0.0);
        assert_eq!(parse_num(Some("n/a")), 0.0);
        assert_eq!(parse_num(Some("--")), 0.0);
    }

    #[test]
    fn parse_record_reads_wld_anywhere() {
        let rec = parse_record(Some("24-5-0 (W-L-D)"));
        assert_eq!(rec.wins, 24);
        assert_eq!(rec.losses, 5);
        assert_eq!(rec.draws, 0);
        assert!((rec.win_rate - 24.0 / 29.0).abs() < 1e-12);

        let rec = parse_record(Some("Record: 10-2-1"));
        assert_eq!((rec.wins, rec.losses, rec.draws), (10, 2, 1));
    }

    #[test]
    fn parse_record_tolerates_garbage() {
        assert_eq!(parse_record(None), FightRecord::default());
        assert_eq!(parse_record(Some("")), FightRecord::default());
        assert_eq!(parse_record(Some("W-L-D")), FightRecord::default());
        assert_eq!(parse_record(Some("12-3")), FightRecord::default());
        // All-zero record keeps win rate at zero instead of dividing by zero.
        assert_eq!(parse_record(Some("0-0-0")).win_rate, 0.0);
    }

    #[test]
    fn parse_finish_rate_reads_both_components() {
        let fr = parse_finish_rate(Some("16 (67%)"));
        assert_eq!(fr.count, 16);
        assert!((fr.rate - 0.67).abs() < 1e-12);

        let fr = parse_finish_rate(Some("0 (0 %)"));
        assert_eq!(fr.count, 0);
        assert_eq!(fr.rate, 0.0);

        let fr = parse_finish_rate(Some("3 (42.9%)"));
        assert!((fr.rate - 0.429).abs() < 1e-12);
    }

    #[test]
    fn parse_finish_rate_components_are_independent() {
        assert_eq!(parse_finish_rate(Some("16")).count, 16);
        assert_eq!(parse_finish_rate(Some("16")).rate, 0.0);
        assert_eq!(parse_finish_rate(Some("(50%)")).count, 0);
        assert!((parse_finish_rate(Some("(50%)")).rate - 0.5).abs() < 1e-12);
        assert_eq!(parse_finish_rate(None), FinishRate::default());
    }

    #[test]
    fn parse_fight_time_is_decimal_minutes() {
        assert!((parse_fight_time(Some("3:45")) - 3.75).abs() < 1e-12);
        assert!((parse_fight_time(Some("12:30")) - 12.5).abs() < 1e-12);
        assert_eq!(parse_fight_time(Some("330")), 0.0);
        assert_eq!(parse_fight_time(Some("1:2:3")), 0.0);
        assert_eq!(parse_fight_time(None), 0.0);
    }

    #[test]
    fn parse_debut_date_accepts_scraper_formats() {
        let expected = NaiveDate::from_ymd_opt(2016, 7, 10).unwrap();
        assert_eq!(parse_debut_date(Some("Jul. 10, 2016")), Some(expected));
        assert_eq!(parse_debut_date(Some("Jul 10, 2016")), Some(expected));
        assert_eq!(parse_debut_date(Some("July 10, 2016")), Some(expected));
        assert_eq!(parse_debut_date(Some("07/10/2016")), Some(expected));
        assert_eq!(parse_debut_date(Some("2016-07-10")), Some(expected));
    }

    #[test]
    fn parse_debut_date_rejects_noise() {
        assert_eq!(parse_debut_date(None), None);
        assert_eq!(parse_debut_date(Some("")), None);
        assert_eq!(parse_debut_date(Some("unknown")), None);
        assert_eq!(parse_debut_date(Some("13/45/2016")), None);
    }

    #[test]
    fn leg_reach_estimate_is_fixed_ratio() {
        assert!((estimate_leg_reach(70.0) - 33.6).abs() < 1e-12);
        assert_eq!(estimate_leg_reach(0.0), 0.0);
    }
}
