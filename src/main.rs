use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod csvio;
mod ext;
mod fetch;
mod jira;
mod model;
mod prompt;
mod range;
mod render;
mod util;

use crate::cli::{normalize, Cli};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  let stdin = std::io::stdin();
  let mut input = stdin.lock();
  let mut output = std::io::stdout();

  // Phase 2: configuration, persisted or prompted
  let stored = if cfg.reconfigure { None } else { config::load(&cfg.config_path) };
  let conf = match stored {
    Some(c) => {
      println!("Using the configuration stored at {}.", cfg.config_path.display());
      c
    }
    None => {
      println!("No usable stored configuration; please enter your details.");
      let c = prompt::read_configuration(&mut input, &mut output)?;
      config::store(&cfg.config_path, &c)?;
      c
    }
  };

  // Phase 3: date range, from flags or prompted
  let now = range::parse_now_override(cfg.now_override.as_deref());
  let date_range = match &cfg.range {
    Some(spec) => range::resolve_range(spec, now)?,
    None => prompt::read_date_range(&mut input, &mut output)?,
  };

  // Phase 4: one search per day, soft per-day failures
  let api = jira::build_api(&conf);
  let days = fetch::collect_daily_tickets(&conf, &date_range, api.as_ref());

  // Phase 5: render rows and write the CSV
  let rows = render::build_report(&conf, &days);
  csvio::write_report(&cfg.out_path, &rows)?;

  println!("Report written to {}.", cfg.out_path.display());

  Ok(())
}
