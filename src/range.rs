use anyhow::{bail, Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use chrono_english::{parse_duration, Interval};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use two_timer::parse as parse_natural;

// Range-related types live here to keep main focused.

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How the user asked for the report window on the command line.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub enum RangeSpec {
  StartEnd { start: String, end: String },
  Month { ym: String },
  ForPhrase { phrase: String },
}

/// An inclusive pair of calendar days, `start <= end` by construction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DateRange {
  start: NaiveDate,
  end: NaiveDate,
}

impl DateRange {
  pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
    if end < start {
      bail!("end date {end} precedes start date {start}");
    }

    Ok(Self { start, end })
  }

  pub fn start(&self) -> NaiveDate {
    self.start
  }

  pub fn end(&self) -> NaiveDate {
    self.end
  }

  /// Number of calendar days covered, inclusive of both bounds.
  pub fn num_days(&self) -> i64 {
    (self.end - self.start).num_days() + 1
  }

  /// Every day from start to end inclusive, ascending.
  pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
    let start = self.start;
    (0..self.num_days()).map(move |i| start + Duration::days(i))
  }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).with_context(|| format!("expected a {DATE_FORMAT} date, got {s:?}"))
}

/// Parse a `--now-override` date (tests only). Invalid input is ignored so a
/// stray value behaves like no override.
pub fn parse_now_override(s: Option<&str>) -> Option<NaiveDate> {
  s.and_then(|raw| NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok())
}

fn effective_today(now: Option<NaiveDate>) -> NaiveDate {
  now.unwrap_or_else(|| Local::now().date_naive())
}

/// Resolve a CLI range selection into a validated `DateRange`.
///
/// `now` overrides "today" for deterministic tests.
pub fn resolve_range(spec: &RangeSpec, now: Option<NaiveDate>) -> Result<DateRange> {
  match spec {
    RangeSpec::StartEnd { start, end } => DateRange::new(parse_date(start)?, parse_date(end)?),
    RangeSpec::Month { ym } => {
      let (start, end) = month_bounds(ym)?;
      DateRange::new(start, end)
    }
    RangeSpec::ForPhrase { phrase } => for_phrase_bounds(phrase, now),
  }
}

/// First and last day of a `YYYY-MM` month.
pub fn month_bounds(year_month: &str) -> Result<(NaiveDate, NaiveDate)> {
  let parts: Vec<&str> = year_month.split('-').collect();

  if parts.len() != 2 {
    bail!("invalid --month, expected YYYY-MM");
  }
  let y: i32 = parts[0].parse().context("parsing year in --month")?;
  let m: u32 = parts[1].parse().context("parsing month in --month")?;

  let first = NaiveDate::from_ymd_opt(y, m, 1).with_context(|| format!("invalid month in --month: {year_month}"))?;
  let first_next = if m == 12 {
    NaiveDate::from_ymd_opt(y + 1, 1, 1)
  } else {
    NaiveDate::from_ymd_opt(y, m + 1, 1)
  };
  let last = first_next.and_then(|d| d.pred_opt()).context("computing month end")?;

  Ok((first, last))
}

// --- Helpers for `--for` parsing ---

fn start_of_week(day: NaiveDate) -> NaiveDate {
  day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

fn last_week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
  let start_this_week = start_of_week(today);
  (start_this_week - Duration::days(7), start_this_week - Duration::days(1))
}

fn last_month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
  let first_this = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();
  let last_prev = first_this.pred_opt().unwrap();
  let first_prev = NaiveDate::from_ymd_opt(last_prev.year(), last_prev.month(), 1).unwrap();
  (first_prev, last_prev)
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
  let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
  NaiveDate::from_ymd_opt(ny, nm, 1).unwrap().pred_opt().unwrap().day()
}

fn subtract_months(day: NaiveDate, n: u32) -> NaiveDate {
  let total = day.year() * 12 + day.month() as i32 - 1 - n as i32;
  let y = total.div_euclid(12);
  let m = (total.rem_euclid(12) + 1) as u32;
  let d = day.day().min(last_day_of_month(y, m));
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Compute an inclusive day range for a natural-language phrase.
///
/// Named phrases ("today", "last week", "last month", "last N days") get
/// calendar-anchored handling; everything else goes through chrono-english
/// durations and then two_timer. Phrases pointing at the future are rejected,
/// a work log has nothing to say about days that have not happened.
fn for_phrase_bounds(input: &str, now: Option<NaiveDate>) -> Result<DateRange> {
  static RE_LAST_DAYS: Lazy<regex::Regex> = Lazy::new(|| regex::Regex::new(r"^last\s+(\d+)\s+days?$").unwrap());

  let phrase = input.trim().to_lowercase();
  let today = effective_today(now);

  if phrase == "today" {
    return DateRange::new(today, today);
  }

  if phrase == "yesterday" {
    let y = today - Duration::days(1);
    return DateRange::new(y, y);
  }

  // Previous calendar week, Monday through Sunday.
  if phrase == "last week" {
    let (s, e) = last_week_range(today);
    return DateRange::new(s, e);
  }

  // Previous calendar month, first through last day.
  if phrase == "last month" {
    let (s, e) = last_month_range(today);
    return DateRange::new(s, e);
  }

  // "last N days" counts back from today inclusive.
  if let Some(caps) = RE_LAST_DAYS.captures(&phrase) {
    let n: i64 = caps.get(1).unwrap().as_str().parse().context("parsing day count")?;

    if n == 0 {
      bail!("last 0 days is an empty range");
    }

    return DateRange::new(today - Duration::days(n - 1), today);
  }

  // Duration/"ago" parsing via chrono-english (handle first to avoid
  // misclassification by the natural parser).
  if let Ok(interval) = parse_duration(&phrase) {
    return match interval {
      Interval::Seconds(secs) if secs <= 0 => DateRange::new(today, today),
      Interval::Days(days) if days <= 0 => DateRange::new(today + Duration::days(days as i64), today),
      Interval::Months(months) if months <= 0 => DateRange::new(subtract_months(today, months.unsigned_abs()), today),
      _ => bail!("phrase {input:?} points to the future"),
    };
  }

  // Natural ranges via two_timer (e.g. "last year", "march 2024").
  if let Ok((start_naive, end_naive, _lit)) = parse_natural(&phrase, None) {
    let start = start_naive.date();
    // two_timer bounds are exclusive at the end; a midnight end belongs to
    // the previous day.
    let end = if end_naive.time() == chrono::NaiveTime::MIN {
      end_naive.date().pred_opt().context("computing phrase end")?
    } else {
      end_naive.date()
    };

    if start > today {
      bail!("phrase {input:?} points to the future");
    }

    return DateRange::new(start, end.min(today));
  }

  bail!("could not understand --for phrase {input:?}")
}
