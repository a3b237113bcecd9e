//! Four-pillars (bazi) calculator.
//!
//! Derives the year/month/day/hour stem-branch pairs for a birth date
//! and time. The solar-to-sexagenary conversion sits behind the
//! [`CalendarEngine`] trait; the built-in [`SexagenaryEngine`] uses the
//! standard anchored cycle arithmetic:
//!
//! - day pillar counted from the JiaZi day 1949-10-01;
//! - solar year boundary approximated at Feb 4 (lichun);
//! - month branch from the solar-term month table, month stem by the
//!   five-tigers rule;
//! - hour branch from two-hour double-hours, hour stem by the
//!   five-rats rule.
//!
//! Callers needing astronomically exact term boundaries can supply
//! their own engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{MindwellError, Result};

/// The ten heavenly stems, cycle order.
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches, cycle order.
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// One stem/branch pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: String,
    pub branch: String,
}

impl Pillar {
    fn new(stem_idx: usize, branch_idx: usize) -> Self {
        Self {
            stem: STEMS[stem_idx % 10].to_string(),
            branch: BRANCHES[branch_idx % 12].to_string(),
        }
    }

    fn from_cycle(index: usize) -> Self {
        Self::new(index % 10, index % 12)
    }
}

/// The four named pillars. Immutable once computed; derived solely from
/// the (date, time) input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

/// Seam to the solar→sexagenary conversion engine.
pub trait CalendarEngine {
    /// Derives the four pillars for a local date and clock time.
    fn eight_char(&self, date: NaiveDate, hour: u32, minute: u32) -> Result<PillarChart>;
}

/// 1949-10-01 was a JiaZi (cycle index 0) day.
const DAY_ANCHOR: (i32, u32, u32) = (1949, 10, 1);

/// Approximate solar-term month boundaries: from (month, day) onward the
/// month branch is the given index into [`BRANCHES`]. Dates before Jan 6
/// still belong to the Zi month that began the previous December.
const MONTH_BOUNDARIES: [(u32, u32, usize); 12] = [
    (1, 6, 1),   // xiaohan  -> 丑
    (2, 4, 2),   // lichun   -> 寅
    (3, 6, 3),   // jingzhe  -> 卯
    (4, 5, 4),   // qingming -> 辰
    (5, 6, 5),   // lixia    -> 巳
    (6, 6, 6),   // mangzhong-> 午
    (7, 7, 7),   // xiaoshu  -> 未
    (8, 8, 8),   // liqiu    -> 申
    (9, 8, 9),   // bailu    -> 酉
    (10, 8, 10), // hanlu    -> 戌
    (11, 7, 11), // lidong   -> 亥
    (12, 7, 0),  // daxue    -> 子
];

/// Built-in sexagenary-cycle engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryEngine;

impl SexagenaryEngine {
    fn solar_year(date: NaiveDate) -> i32 {
        // The sexagenary year turns over at lichun, not Jan 1.
        if (date.month(), date.day()) < (2, 4) {
            date.year() - 1
        } else {
            date.year()
        }
    }

    fn month_branch(date: NaiveDate) -> usize {
        let key = (date.month(), date.day());
        MONTH_BOUNDARIES
            .iter()
            .rev()
            .find(|&&(m, d, _)| (m, d) <= key)
            .map(|&(_, _, branch)| branch)
            .unwrap_or(0) // before Jan 6: still the Zi month
    }
}

impl CalendarEngine for SexagenaryEngine {
    fn eight_char(&self, date: NaiveDate, hour: u32, minute: u32) -> Result<PillarChart> {
        if hour > 23 || minute > 59 {
            return Err(MindwellError::invalid_input(format!(
                "time {hour:02}:{minute:02} is out of range"
            )));
        }

        // Year pillar: (y - 4) walks the cycle with 1984 as JiaZi year.
        let year = Self::solar_year(date);
        let year_stem = (year - 4).rem_euclid(10) as usize;
        let year_branch = (year - 4).rem_euclid(12) as usize;

        // Month pillar: branch from the term table, stem by five tigers
        // (the Yin month of a Jia/Ji year opens with Bing).
        let month_branch = Self::month_branch(date);
        let month_offset = (month_branch + 12 - 2) % 12;
        let month_stem = ((year_stem % 5) * 2 + 2 + month_offset) % 10;

        // Day pillar: whole days since the anchored JiaZi day.
        let anchor = NaiveDate::from_ymd_opt(DAY_ANCHOR.0, DAY_ANCHOR.1, DAY_ANCHOR.2)
            .expect("static anchor date is valid");
        let days = date.signed_duration_since(anchor).num_days();
        let day_index = days.rem_euclid(60) as usize;
        let day_stem = day_index % 10;

        // Hour pillar: two-hour double-hours starting at 23:00, stem by
        // five rats (a Jia/Ji day opens with JiaZi hour).
        let hour_branch = ((hour + 1) / 2) as usize % 12;
        let hour_stem = ((day_stem % 5) * 2 + hour_branch) % 10;

        Ok(PillarChart {
            year: Pillar::new(year_stem, year_branch),
            month: Pillar::new(month_stem, month_branch),
            day: Pillar::from_cycle(day_index),
            hour: Pillar::new(hour_stem, hour_branch),
        })
    }
}

/// Parses a "HH:MM" clock time into hour and minute components.
pub fn parse_time(time: &str) -> Result<(u32, u32)> {
    let (hour, minute) = time
        .trim()
        .split_once(':')
        .ok_or_else(|| MindwellError::invalid_input(format!("time '{time}' is not HH:MM")))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| MindwellError::invalid_input(format!("bad hour in '{time}'")))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| MindwellError::invalid_input(format!("bad minute in '{time}'")))?;
    if hour > 23 || minute > 59 {
        return Err(MindwellError::invalid_input(format!(
            "time '{time}' is out of range"
        )));
    }
    Ok((hour, minute))
}

/// Computes the four pillars with a caller-supplied engine.
///
/// A rejected time or a conversion failure is surfaced to the caller —
/// never silently defaulted.
pub fn compute_pillars_with(
    engine: &dyn CalendarEngine,
    date: NaiveDate,
    time: &str,
) -> Result<PillarChart> {
    let (hour, minute) = parse_time(time)?;
    engine.eight_char(date, hour, minute)
}

/// Computes the four pillars with the built-in engine.
pub fn compute_pillars(date: NaiveDate, time: &str) -> Result<PillarChart> {
    compute_pillars_with(&SexagenaryEngine, date, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chart(y: i32, m: u32, d: u32, time: &str) -> PillarChart {
        compute_pillars(date(y, m, d), time).unwrap()
    }

    #[test]
    fn anchor_day_is_jiazi() {
        let chart = chart(1949, 10, 1, "00:00");
        assert_eq!(chart.day, Pillar { stem: "甲".into(), branch: "子".into() });
        // JiaZi hour opens a Jia day.
        assert_eq!(chart.hour, Pillar { stem: "甲".into(), branch: "子".into() });
        // 1949 (after lichun) is a JiChou year.
        assert_eq!(chart.year, Pillar { stem: "己".into(), branch: "丑".into() });
        // Early October falls in the You month; JiChou year makes it GuiYou.
        assert_eq!(chart.month, Pillar { stem: "癸".into(), branch: "酉".into() });
    }

    #[test]
    fn millennium_noon() {
        let chart = chart(2000, 1, 1, "12:00");
        // Jan 1 is before lichun: still the JiMao year 1999.
        assert_eq!(chart.year, Pillar { stem: "己".into(), branch: "卯".into() });
        // And still the BingZi month that began Dec 7.
        assert_eq!(chart.month, Pillar { stem: "丙".into(), branch: "子".into() });
        assert_eq!(chart.day, Pillar { stem: "戊".into(), branch: "午".into() });
        assert_eq!(chart.hour, Pillar { stem: "戊".into(), branch: "午".into() });
    }

    #[test]
    fn computation_is_deterministic() {
        let a = chart(1993, 6, 15, "08:30");
        let b = chart(1993, 6, 15, "08:30");
        assert_eq!(a, b);
    }

    #[test]
    fn late_zi_hour_maps_to_zi_branch() {
        let chart = chart(2000, 1, 1, "23:30");
        assert_eq!(chart.hour.branch, "子");
        // Day pillar stays with the calendar date.
        assert_eq!(chart.day.stem, "戊");
    }

    #[test]
    fn year_turns_over_at_lichun() {
        let before = chart(1984, 2, 3, "10:00");
        let after = chart(1984, 2, 4, "10:00");
        // 1983 GuiHai -> 1984 JiaZi.
        assert_eq!(before.year, Pillar { stem: "癸".into(), branch: "亥".into() });
        assert_eq!(after.year, Pillar { stem: "甲".into(), branch: "子".into() });
    }

    #[test]
    fn malformed_times_are_rejected() {
        let d = date(2000, 1, 1);
        assert!(compute_pillars(d, "noon").is_err());
        assert!(compute_pillars(d, "24:00").is_err());
        assert!(compute_pillars(d, "12:60").is_err());
        assert!(compute_pillars(d, "12").is_err());
    }

    #[test]
    fn parse_time_accepts_padding_and_whitespace() {
        assert_eq!(parse_time(" 08:05 ").unwrap(), (8, 5));
        assert_eq!(parse_time("0:0").unwrap(), (0, 0));
    }
}
