// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Navigate nested serde_json::Value trees via dotted paths with tolerant string extraction
// role: extension/serde_json
// outputs: JsonPath trait with at/str_at/str_at_or_empty accessors
// invariants: No panics; missing paths and nulls yield None or the empty string, never an error
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Extension to walk nested values via dotted paths like "fields.parent.key".
///
/// Jira search responses nest most interesting data two or three objects deep
/// and omit optional branches entirely (an issue without a parent simply has
/// no `fields.parent`). These accessors make that shape cheap to consume:
/// a missing segment or a JSON null is an ordinary empty result.
pub trait JsonPath {
  /// Borrow the value at `path`, if every segment exists.
  fn at(&self, path: &str) -> Option<&serde_json::Value>;

  /// Extract a string at `path`; None when absent or not a string.
  fn str_at(&self, path: &str) -> Option<String>;

  /// Extract a string at `path`, falling back to "" when absent.
  fn str_at_or_empty(&self, path: &str) -> String;
}

impl JsonPath for serde_json::Value {
  fn at(&self, path: &str) -> Option<&serde_json::Value> {
    if path.is_empty() {
      return Some(self);
    }

    let mut cur = self;

    for segment in path.split('.') {
      cur = cur.get(segment)?;
    }

    Some(cur)
  }

  fn str_at(&self, path: &str) -> Option<String> {
    self.at(path).and_then(|v| v.as_str()).map(|s| s.to_string())
  }

  fn str_at_or_empty(&self, path: &str) -> String {
    self.str_at(path).unwrap_or_default()
  }
}
