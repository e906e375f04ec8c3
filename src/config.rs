use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything the report needs to know about the user, their workplace and
/// their Jira account. Collected once (see `prompt::read_configuration`),
/// persisted as JSON, and read-only from then on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
  pub name: String,
  pub birthday: String,
  pub service_start_date: String,
  pub phone_number: String,
  pub workplace: String,
  pub company_name: String,
  pub ceo_name: String,
  pub reason: String,
  pub jira_url: String,
  pub jira_user_id: String,
  pub jira_password: String,
  pub work_start_time: String,
  pub work_end_time: String,
}

/// Read a persisted configuration. A missing file means a first run; an
/// unparseable file is reported and treated the same way, so the caller
/// re-prompts and overwrites it.
pub fn load(path: &Path) -> Option<Configuration> {
  let contents = std::fs::read_to_string(path).ok()?;

  match serde_json::from_str::<Configuration>(&contents) {
    Ok(conf) => Some(conf),
    Err(err) => {
      eprintln!("[config] stored file at {} is not usable ({err}); it will be replaced", path.display());
      None
    }
  }
}

pub fn store(path: &Path, conf: &Configuration) -> Result<()> {
  let json = serde_json::to_string_pretty(conf).context("serializing configuration")?;

  std::fs::write(path, json).with_context(|| format!("writing configuration to {}", path.display()))
}

/// A fully populated configuration for tests across the crate.
#[cfg(test)]
pub(crate) fn sample() -> Configuration {
  Configuration {
    name: "Kim Cheolsu".into(),
    birthday: "1995-01-02".into(),
    service_start_date: "2023-06-01".into(),
    phone_number: "010-1234-5678".into(),
    workplace: "Seoul".into(),
    company_name: "Acme Corp".into(),
    ceo_name: "Lee Younghee".into(),
    reason: "telecommuting".into(),
    jira_url: "https://jira.example.com".into(),
    jira_user_id: "cheolsu".into(),
    jira_password: "secret".into(),
    work_start_time: "09:00".into(),
    work_end_time: "18:00".into(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn store_then_load_roundtrips() {
    let td = tempfile::TempDir::new().unwrap();
    let path = td.path().join("configuration.json");
    let conf = sample();

    store(&path, &conf).unwrap();
    assert_eq!(load(&path), Some(conf));
  }

  #[test]
  fn load_missing_file_is_none() {
    let td = tempfile::TempDir::new().unwrap();
    assert_eq!(load(&td.path().join("nope.json")), None);
  }

  #[test]
  fn load_garbage_is_none() {
    let td = tempfile::TempDir::new().unwrap();
    let path = td.path().join("configuration.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert_eq!(load(&path), None);
  }
}
