use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use crate::config::Configuration;
use crate::range::{parse_date, DateRange};

// Terminal prompting, generic over its streams so tests drive it with
// in-memory buffers instead of a live terminal.

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
  write!(out, "{question}")?;
  out.flush()?;

  let mut line = String::new();

  if input.read_line(&mut line)? == 0 {
    bail!("input closed while waiting for an answer");
  }

  Ok(line.trim().to_string())
}

/// Ask until `parse` accepts the answer. EOF still aborts; only bad input
/// loops.
fn ask_until<R, W, T>(input: &mut R, out: &mut W, question: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T>
where
  R: BufRead,
  W: Write,
{
  loop {
    let answer = ask(input, out, question)?;

    match parse(&answer) {
      Ok(value) => return Ok(value),
      Err(err) => writeln!(out, "Invalid input ({err}); please try again.")?,
    }
  }
}

/// Collect all thirteen configuration fields interactively.
pub fn read_configuration<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Configuration> {
  Ok(Configuration {
    name: ask(input, out, "Enter your name: ")?,
    birthday: ask(input, out, "Enter your birthday: ")?,
    service_start_date: ask(input, out, "Enter your military service start date: ")?,
    phone_number: ask(input, out, "Enter your phone number: ")?,
    workplace: ask(input, out, "Enter your current telecommuting workplace: ")?,
    company_name: ask(input, out, "Enter your company name: ")?,
    ceo_name: ask(input, out, "Enter the CEO's name: ")?,
    reason: ask(input, out, "Enter the reason for telecommuting: ")?,
    jira_url: ask(input, out, "Enter the Jira workspace URL: ")?,
    jira_user_id: ask(input, out, "Enter your Jira user id: ")?,
    jira_password: ask(input, out, "Enter your Jira password: ")?,
    work_start_time: ask(input, out, "Enter your work start time: ")?,
    work_end_time: ask(input, out, "Enter your work end time: ")?,
  })
}

/// Collect a start/end day pair, re-prompting until both parse and the end
/// does not precede the start.
pub fn read_date_range<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<DateRange> {
  let start = ask_until(input, out, "Enter the start date (yyyy-MM-dd): ", |s| parse_date(s))?;

  ask_until(input, out, "Enter the end date (yyyy-MM-dd): ", |s| {
    DateRange::new(start, parse_date(s)?)
  })
}
