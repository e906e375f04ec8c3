use crate::config::Configuration;
use crate::model::{DailyTickets, ReportRow};

/// At most this many ticket summaries go into one day's content cell;
/// anything beyond is dropped without a marker.
pub const MAX_TICKETS_PER_DAY: usize = 3;

/// Month/day only; the reporting form has no year column.
const CSV_DATE_FORMAT: &str = "%m/%d";

/// Placeholder for a day with no tickets ("no content").
const EMPTY_DAY_CONTENT: &str = "내용없음";

/// Build the full row sequence: 8 fixed metadata rows, then one row per
/// fetched day in calendar order.
///
/// The labels are the literal strings the downstream reporting form expects;
/// they are part of the output format, not user-facing UI text.
pub fn build_report(conf: &Configuration, days: &[DailyTickets]) -> Vec<ReportRow> {
  let mut rows = vec![
    ReportRow::header("이름", &conf.name),
    ReportRow::header("생년월일", &conf.birthday),
    ReportRow::header("병역시작일", &conf.service_start_date),
    ReportRow::header("전화번호", &conf.phone_number),
    ReportRow::header("근무지", &conf.workplace),
    ReportRow::header("회사명", &conf.company_name),
    ReportRow::header("대표명", &conf.ceo_name),
    ReportRow::header("재택 사유", &conf.reason),
  ];

  for day in days {
    rows.push(day_row(conf, day));
  }

  rows
}

fn day_row(conf: &Configuration, day: &DailyTickets) -> ReportRow {
  let content = if day.tickets.is_empty() {
    EMPTY_DAY_CONTENT.to_string()
  } else {
    day
      .tickets
      .iter()
      .take(MAX_TICKETS_PER_DAY)
      .map(|t| t.summary.as_str())
      .collect::<Vec<_>>()
      .join("\n")
  };

  ReportRow {
    label: day.date.format(CSV_DATE_FORMAT).to_string(),
    content,
    shift_start: conf.work_start_time.clone(),
    shift_end: conf.work_end_time.clone(),
  }
}
