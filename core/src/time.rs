use chrono::{Datelike, Duration, NaiveDate, Weekday};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Calendar month used as the reporting window. Always representable as a `NaiveDate` range.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
    last: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Invalid month: {}", month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("Month out of range: {}-{:02}", year, month))?;
        Ok(Self::of(first))
    }

    pub fn of(date: NaiveDate) -> Self {
        // day 1 and day 28 exist in every representable month
        let first = date.with_day(1).unwrap_or(date);
        let last = (28..=31)
            .rev()
            .find_map(|day| first.with_day(day))
            .unwrap_or(first);
        Self { first, last }
    }

    /// Parses `yyyy-MM`.
    pub fn parse(input: &str) -> Result<Self> {
        let (y, m) = input
            .trim()
            .split_once('-')
            .ok_or_else(|| anyhow!("Could not parse month: {}", input))?;
        let year: i32 = y.parse().map_err(|_| anyhow!("Invalid year in month: {}", input))?;
        let month: u32 = m.parse().map_err(|_| anyhow!("Invalid month in month: {}", input))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// `None` past the last representable month.
    pub fn next(&self) -> Option<Self> {
        self.last.succ_opt().map(Self::of)
    }

    pub fn previous(&self) -> Option<Self> {
        self.first.pred_opt().map(Self::of)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last;
        self.first.iter_days().take_while(move |d| *d <= last)
    }

    pub fn label(&self) -> String {
        format!("{} {}", month_name_pt(self.month()), self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> String {
        month.to_string()
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "today" | "tod" | "hoje" => return Ok(today),
        "yesterday" | "yest" | "ontem" => {
            return today.pred_opt().ok_or_else(|| anyhow!("Date out of range: {}", input));
        }
        _ => {}
    }

    // -Nd: N days ago
    if let Some(rest) = input.strip_prefix('-') {
        if let Some(num_str) = rest.strip_suffix('d') {
            let count: i64 = num_str.parse().map_err(|_| anyhow!("Invalid relative format"))?;
            return Duration::try_days(count)
                .and_then(|offset| today.checked_sub_signed(offset))
                .ok_or_else(|| anyhow!("Date out of range: {}", input));
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, DATE_KEY_FORMAT) {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(input, DISPLAY_FORMAT) {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

/// Monday-start grid of whole weeks covering `month`, leading and trailing days included.
/// Weeks that would leave the representable date range are cut off.
pub fn calendar_grid(month: YearMonth) -> Vec<[NaiveDate; 7]> {
    let first = month.first_day();
    let last = month.last_day();
    let lead = Duration::days(first.weekday().num_days_from_monday() as i64);
    let mut cursor = first.checked_sub_signed(lead).unwrap_or(first);

    let mut weeks = Vec::new();
    while cursor <= last {
        let mut week = [cursor; 7];
        for (i, slot) in week.iter_mut().enumerate() {
            match cursor.checked_add_signed(Duration::days(i as i64)) {
                Some(date) => *slot = date,
                None => return weeks,
            }
        }
        weeks.push(week);
        match cursor.checked_add_signed(Duration::days(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    weeks
}

pub fn weekday_short_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Seg",
        Weekday::Tue => "Ter",
        Weekday::Wed => "Qua",
        Weekday::Thu => "Qui",
        Weekday::Fri => "Sex",
        Weekday::Sat => "Sáb",
        Weekday::Sun => "Dom",
    }
}

pub fn month_name_pt(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        12 => "dezembro",
        _ => "?",
    }
}
