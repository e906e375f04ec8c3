use std::path::{Path, PathBuf};

/// Write a complete configuration file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path) -> PathBuf {
  let path = dir.join("configuration.json");
  let conf = serde_json::json!({
    "name": "Kim Cheolsu",
    "birthday": "1995-01-02",
    "service_start_date": "2023-06-01",
    "phone_number": "010-1234-5678",
    "workplace": "Seoul",
    "company_name": "Acme Corp",
    "ceo_name": "Lee Younghee",
    "reason": "telecommuting",
    "jira_url": "https://jira.example.com",
    "jira_user_id": "cheolsu",
    "jira_password": "secret",
    "work_start_time": "09:00",
    "work_end_time": "18:00"
  });
  std::fs::write(&path, serde_json::to_string_pretty(&conf).unwrap()).unwrap();
  path
}

/// A Jira search response body whose issues carry the given summaries.
#[allow(dead_code)]
pub fn issues_body(summaries: &[&str]) -> String {
  let issues: Vec<serde_json::Value> = summaries
    .iter()
    .enumerate()
    .map(|(i, s)| serde_json::json!({ "key": format!("WORK-{i}"), "fields": { "summary": s } }))
    .collect();
  serde_json::json!({ "issues": issues }).to_string()
}

/// Read the produced CSV back into rows of cells.
#[allow(dead_code)]
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
  let mut reader = csv::ReaderBuilder::new().has_headers(false).from_path(path).unwrap();
  reader
    .records()
    .map(|r| r.unwrap().iter().map(|c| c.to_string()).collect())
    .collect()
}

/// The eight metadata labels, in report order.
#[allow(dead_code)]
pub const HEADER_LABELS: [&str; 8] = ["이름", "생년월일", "병역시작일", "전화번호", "근무지", "회사명", "대표명", "재택 사유"];
