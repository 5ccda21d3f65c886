//! Total tenure from `<Month> <Year> - <Month> <Year>` style date ranges.
//!
//! Every recognised range is summed as-is. Overlapping ranges (concurrent
//! roles) are counted twice.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extraction::models::Experience;

/// Full month names and their three-letter abbreviations.
const MONTHS: [(&str, u32); 24] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

// Only names from `MONTHS` can open a range, longest first so `january`
// wins over `jan`.
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    let mut names: Vec<&str> = MONTHS.iter().map(|(name, _)| *name).collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.len()));
    let month = names.join("|");

    Regex::new(&format!(
        r"(?ix)
        \b(?P<start_month>{month})\b\.?\s*(?P<start_year>\d{{4}})
        (?:\s*(?:-|–|—|\bto\b)\s*)+
        (?:
            (?P<end_month>{month})\b\.?\s*(?P<end_year>\d{{4}})\b
          | (?P<open>present|current|till\s+date)\b
        )"
    ))
    .expect("valid date range regex")
});

/// One matched range, resolved to calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_month: u32,
    pub start_year: i32,
    pub end_month: u32,
    pub end_year: i32,
}

impl DateRange {
    /// Inclusive of both the start and end month.
    pub fn months(&self) -> i64 {
        (self.end_year as i64 - self.start_year as i64) * 12
            + (self.end_month as i64 - self.start_month as i64)
            + 1
    }
}

pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, number)| *number)
}

/// All resolvable ranges in the text. Open-ended ranges end at `today`.
pub fn find_date_ranges(text: &str, today: NaiveDate) -> Vec<DateRange> {
    DATE_RANGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let start_month = month_number(&caps["start_month"])?;
            let start_year = caps["start_year"].parse().ok()?;

            let (end_month, end_year) = if caps.name("open").is_some() {
                (today.month(), today.year())
            } else {
                let end_month = month_number(caps.name("end_month")?.as_str())?;
                let end_year = caps.name("end_year")?.as_str().parse().ok()?;
                (end_month, end_year)
            };

            Some(DateRange {
                start_month,
                start_year,
                end_month,
                end_year,
            })
        })
        .collect()
}

/// Sums the positive spans of every range. Non-positive spans are dropped.
pub fn total_experience_months(text: &str, today: NaiveDate) -> u32 {
    let total: i64 = find_date_ranges(text, today)
        .iter()
        .map(DateRange::months)
        .filter(|months| *months > 0)
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

pub fn extract_experience(text: &str, today: NaiveDate) -> Experience {
    Experience::from_months(total_experience_months(text, today))
}
