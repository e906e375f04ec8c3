use anyhow::{Context, Result};

use crate::config::Configuration;
use crate::ext::serde_json::JsonPath;
use crate::jira::JiraApi;
use crate::model::{DailyTickets, Ticket};
use crate::range::{DateRange, DATE_FORMAT};

/// Fetch the tickets open on each day of the range, one search per day.
///
/// A ticket counts as open on day `d` when it is assigned to the configured
/// user, was created on or before `d`, and was resolved on or after `d`.
///
/// Failures are per-day and soft: a day whose request, transport, body read,
/// or parse fails is logged to stderr and omitted from the result entirely —
/// the remaining days still run. Callers should treat a shorter-than-range
/// result as a partially failed run, the `[jira]` log lines carry the detail.
/// A non-200 status alone is only a warning; its body is still parsed.
pub fn collect_daily_tickets(conf: &Configuration, range: &DateRange, api: &dyn JiraApi) -> Vec<DailyTickets> {
  println!("Fetching assigned Jira tickets for each day of the range over HTTP.");

  let mut list: Vec<DailyTickets> = Vec::new();

  for day in range.days() {
    let day_str = day.format(DATE_FORMAT).to_string();
    let jql = format!(
      "assignee={} and created<={} and resolved>={}",
      conf.jira_user_id, day_str, day_str
    );

    let resp = match api.search(day, &jql) {
      Ok(r) => r,
      Err(err) => {
        eprintln!("[jira] {day_str}: search failed: {err:#}");
        continue;
      }
    };

    if resp.status != 200 {
      eprintln!("[jira] {day_str}: Jira answered with status {}:", resp.status);
      eprintln!("{}", resp.body);
    }

    match parse_issues(&resp.body) {
      Ok(tickets) => list.push(DailyTickets { date: day, tickets }),
      Err(err) => {
        eprintln!("[jira] {day_str}: unusable response: {err:#}");
      }
    }
  }

  list
}

/// Parse a search response body into tickets.
///
/// Requires a JSON object with an `issues` array; everything nested below an
/// issue is extracted tolerantly (absent parent linkage becomes "").
pub fn parse_issues(body: &str) -> Result<Vec<Ticket>> {
  let v: serde_json::Value = serde_json::from_str(body).context("parsing search response as JSON")?;

  let issues = v
    .at("issues")
    .and_then(|x| x.as_array())
    .context("response has no issues array")?;

  Ok(issues.iter().map(ticket_from_issue).collect())
}

fn ticket_from_issue(issue: &serde_json::Value) -> Ticket {
  Ticket {
    key: issue.str_at_or_empty("key"),
    summary: issue.str_at_or_empty("fields.summary"),
    description: issue.str_at_or_empty("fields.description"),
    created: issue.str_at_or_empty("fields.created"),
    updated: issue.str_at_or_empty("fields.updated"),
    resolution_date: issue.str_at_or_empty("fields.resolutiondate"),
    parent_key: issue.str_at_or_empty("fields.parent.key"),
    parent_summary: issue.str_at_or_empty("fields.parent.fields.summary"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::jira::SearchResponse;
  use crate::range::parse_date;
  use chrono::NaiveDate;
  use std::cell::RefCell;

  fn issue_body(summaries: &[&str]) -> String {
    let issues: Vec<serde_json::Value> = summaries
      .iter()
      .enumerate()
      .map(|(i, s)| serde_json::json!({ "key": format!("WORK-{i}"), "fields": { "summary": s } }))
      .collect();
    serde_json::json!({ "issues": issues }).to_string()
  }

  // Scripted in-memory API: one entry per expected day.
  struct ScriptedApi {
    responses: RefCell<Vec<Result<SearchResponse>>>,
    jql_log: RefCell<Vec<String>>,
  }

  impl ScriptedApi {
    fn new(responses: Vec<Result<SearchResponse>>) -> Self {
      Self {
        responses: RefCell::new(responses),
        jql_log: RefCell::new(Vec::new()),
      }
    }
  }

  impl JiraApi for ScriptedApi {
    fn search(&self, _day: NaiveDate, jql: &str) -> Result<SearchResponse> {
      self.jql_log.borrow_mut().push(jql.to_string());
      self.responses.borrow_mut().remove(0)
    }
  }

  fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(parse_date(start).unwrap(), parse_date(end).unwrap()).unwrap()
  }

  fn ok(body: String) -> Result<SearchResponse> {
    Ok(SearchResponse { status: 200, body })
  }

  #[test]
  fn queries_every_day_with_expected_jql() {
    let api = ScriptedApi::new(vec![ok(issue_body(&[])), ok(issue_body(&[])), ok(issue_body(&[]))]);
    let conf = crate::config::sample();

    let out = collect_daily_tickets(&conf, &range("2024-03-05", "2024-03-07"), &api);

    assert_eq!(out.len(), 3);
    let jqls = api.jql_log.borrow();
    assert_eq!(jqls.len(), 3);
    assert_eq!(jqls[0], "assignee=cheolsu and created<=2024-03-05 and resolved>=2024-03-05");
    assert_eq!(jqls[2], "assignee=cheolsu and created<=2024-03-07 and resolved>=2024-03-07");
  }

  #[test]
  fn failed_day_is_skipped_and_later_days_continue() {
    let api = ScriptedApi::new(vec![
      ok(issue_body(&["A"])),
      Err(anyhow::anyhow!("connection refused")),
      ok(issue_body(&["C"])),
    ]);
    let conf = crate::config::sample();

    let out = collect_daily_tickets(&conf, &range("2024-03-05", "2024-03-07"), &api);

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].date, parse_date("2024-03-05").unwrap());
    assert_eq!(out[1].date, parse_date("2024-03-07").unwrap());
    assert_eq!(out[1].tickets[0].summary, "C");
  }

  #[test]
  fn non_200_body_is_still_parsed() {
    let api = ScriptedApi::new(vec![Ok(SearchResponse {
      status: 400,
      body: issue_body(&["warn anyway"]),
    })]);
    let conf = crate::config::sample();

    let out = collect_daily_tickets(&conf, &range("2024-03-05", "2024-03-05"), &api);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tickets[0].summary, "warn anyway");
  }

  #[test]
  fn unparseable_body_skips_the_day() {
    let api = ScriptedApi::new(vec![
      Ok(SearchResponse {
        status: 200,
        body: "<html>login please</html>".into(),
      }),
      ok(issue_body(&["B"])),
    ]);
    let conf = crate::config::sample();

    let out = collect_daily_tickets(&conf, &range("2024-03-05", "2024-03-06"), &api);

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, parse_date("2024-03-06").unwrap());
  }

  #[test]
  fn missing_issues_array_counts_as_parse_failure() {
    assert!(parse_issues(r#"{"errorMessages":["bad jql"]}"#).is_err());
  }

  #[test]
  fn parse_issues_extracts_nested_fields_tolerantly() {
    let body = serde_json::json!({
      "issues": [
        {
          "key": "WORK-7",
          "fields": {
            "summary": "Ship the report",
            "description": null,
            "created": "2024-03-01T09:00:00.000+0900",
            "updated": "2024-03-04T10:00:00.000+0900",
            "resolutiondate": "2024-03-09T18:00:00.000+0900",
            "parent": { "key": "WORK-1", "fields": { "summary": "Reporting epic" } }
          }
        },
        { "key": "WORK-8", "fields": { "summary": "No parent here" } }
      ]
    })
    .to_string();

    let tickets = parse_issues(&body).unwrap();
    assert_eq!(tickets.len(), 2);

    assert_eq!(tickets[0].key, "WORK-7");
    assert_eq!(tickets[0].summary, "Ship the report");
    assert_eq!(tickets[0].description, "");
    assert_eq!(tickets[0].parent_key, "WORK-1");
    assert_eq!(tickets[0].parent_summary, "Reporting epic");

    assert_eq!(tickets[1].parent_key, "");
    assert_eq!(tickets[1].parent_summary, "");
  }
}
