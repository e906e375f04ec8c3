// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the ticket and report-row model shared by fetching and rendering
// role: model/types
// outputs: Ticket, DailyTickets, ReportRow value types
// invariants: Ticket fields are plain strings (absent Jira fields arrive as ""); rows are never mutated after creation
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Jira issue as returned by the search endpoint.
///
/// All fields are extracted tolerantly: an issue without a parent (or with a
/// null description) carries empty strings in those slots. Only `summary`
/// feeds the rendered report today; the remaining fields are retrieved so a
/// richer report format can consume them without touching the fetch layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Ticket {
  pub key: String,
  pub summary: String,
  pub description: String,
  pub created: String,
  pub updated: String,
  pub resolution_date: String,
  pub parent_key: String,
  pub parent_summary: String,
}

/// One calendar day paired with the tickets that were open on that day.
#[derive(Debug, Clone)]
pub struct DailyTickets {
  pub date: NaiveDate,
  pub tickets: Vec<Ticket>,
}

/// One CSV record: four ordered cells.
///
/// Header rows carry a field label and its value with empty shift cells;
/// per-day rows carry an `MM/dd` date, the joined summaries, and the
/// configured shift times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
  pub label: String,
  pub content: String,
  pub shift_start: String,
  pub shift_end: String,
}

impl ReportRow {
  /// A metadata row: `(label, value, "", "")`. The two trailing cells are
  /// reserved so header rows align with the per-day shift-time columns.
  pub fn header(label: &str, value: &str) -> Self {
    Self {
      label: label.to_string(),
      content: value.to_string(),
      shift_start: String::new(),
      shift_end: String::new(),
    }
  }

  pub fn cells(&self) -> [&str; 4] {
    [&self.label, &self.content, &self.shift_start, &self.shift_end]
  }
}
