// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, basic-auth encoding, and man page rendering
// role: utilities/helpers
// inputs: Paths; Jira credentials; clap CommandFactory
// outputs: Canonicalized paths, Basic authorization values, man page text
// invariants: basic_auth_value never logs the password; canonicalize_lossy always returns something printable
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use clap::CommandFactory;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Build the full `Authorization` header value for Jira basic auth:
/// `Basic base64(user:password)`.
pub fn basic_auth_value(user: &str, password: &str) -> String {
  format!("Basic {}", BASE64.encode(format!("{user}:{password}")))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;

  #[test]
  fn basic_auth_matches_known_encoding() {
    // RFC 2617's canonical example
    assert_eq!(basic_auth_value("Aladdin", "open sesame"), "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
  }

  #[test]
  fn canonicalize_returns_abs_path() {
    let abs = canonicalize_lossy(".");
    assert!(abs.starts_with('/'));
  }

  #[derive(Parser, Debug)]
  #[command(name = "dummy", version, about = "Dummy CLI", long_about = None)]
  struct DummyCli;

  #[test]
  fn render_man_page_produces_troff_text() {
    let page = render_man_page::<DummyCli>().expect("render manpage");
    assert!(page.contains(".TH"));
    assert!(page.to_lowercase().contains("dummy"));
  }
}
