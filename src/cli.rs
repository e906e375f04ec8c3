use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::range::RangeSpec;

#[derive(Parser, Debug)]
#[command(
    name = "jira-activity-report",
    version,
    about = "Export a per-day Jira work log to CSV",
    long_about = None
)]
pub struct Cli {
  /// Path to the persisted configuration file
  #[arg(long, default_value = "configuration.json")]
  pub config: PathBuf,

  /// Output CSV path (overwritten on every run)
  #[arg(long, default_value = "result.csv")]
  pub out: PathBuf,

  /// Discard the persisted configuration and prompt for it again
  #[arg(long)]
  pub reconfigure: bool,

  /// First day of the report, yyyy-MM-dd; must be paired with --end
  #[arg(long, alias = "since")]
  pub start: Option<String>,

  /// Last day of the report (inclusive); must be paired with --start
  #[arg(long, alias = "until")]
  pub end: Option<String>,

  /// Whole calendar month, e.g. 2024-03
  #[arg(long)]
  pub month: Option<String>,

  /// Natural language range, e.g. "last week" or "last 14 days"
  #[arg(long = "for")]
  pub for_str: Option<String>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override "today" for natural-language parsing (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub config_path: PathBuf,
  pub out_path: PathBuf,
  pub reconfigure: bool,
  /// None means no range flags were given; the range is prompted for.
  pub range: Option<RangeSpec>,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  // Validate range selection
  let range = match (&cli.start, &cli.end, &cli.month, &cli.for_str) {
    (Some(s), Some(e), None, None) => Some(RangeSpec::StartEnd {
      start: s.clone(),
      end: e.clone(),
    }),
    (None, None, Some(ym), None) => Some(RangeSpec::Month { ym: ym.clone() }),
    (None, None, None, Some(p)) => Some(RangeSpec::ForPhrase { phrase: p.clone() }),
    (None, None, None, None) => None,
    (Some(_), None, ..) | (None, Some(_), ..) => {
      bail!("--start and --end must be given together")
    }
    _ => bail!("Ambiguous range selection: choose only one of --start/--end | --month | --for"),
  };

  Ok(EffectiveConfig {
    config_path: cli.config,
    out_path: cli.out,
    reconfigure: cli.reconfigure,
    range,
    now_override: cli.now_override,
  })
}
