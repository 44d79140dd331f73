//! Loading the optional course bank from TOML.
//!
//! See `CatalogConfig` for the expected schema. Conversion into domain
//! records (and the skipping of malformed entries) happens in `state`.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{CourseLane, ExpectedTerms};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
  #[serde(default)]
  pub courses: Vec<CourseCfg>,
  #[serde(default)]
  pub resources: Vec<ResourceCfg>,
}

/// Course entry accepted in TOML configuration.
/// `id` is formally optional in the schema, but entries without one are
/// skipped at load time: ids must be author-assigned and stable, since
/// external bookmarks reference them.
#[derive(Clone, Debug, Deserialize)]
pub struct CourseCfg {
  #[serde(default)] pub id: Option<String>,
  pub lane: CourseLane,
  pub title: String,
  #[serde(default)] pub number: Option<u32>,
  #[serde(default)] pub overview: Option<String>,
  #[serde(default)] pub outcomes: Vec<String>,
  #[serde(default)] pub exercises: Vec<ExerciseCfg>,
}

/// Exercise entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ExerciseCfg {
  #[serde(default)] pub id: Option<String>,
  pub title: String,
  pub instruction: String,
  #[serde(default)] pub details: Vec<String>,
  #[serde(default)] pub placeholder: Option<String>,
  #[serde(default)] pub expected: Option<ExpectedTerms>,
  #[serde(default)] pub check_for: Option<Vec<String>>,
  #[serde(default)] pub success: Option<String>,
  #[serde(default)] pub failure: Option<String>,
}

/// Resource entry accepted in TOML configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceCfg {
  #[serde(default)] pub id: Option<String>,
  pub lane: CourseLane,
  pub title: String,
  pub url: String,
  #[serde(default)] pub blurb: Option<String>,
}

/// Attempt to load `CatalogConfig` from CATALOG_CONFIG_PATH. On any
/// parsing/IO error, returns None; the app falls back to seeds alone.
pub fn load_catalog_config_from_env() -> Option<CatalogConfig> {
  let path = std::env::var("CATALOG_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<CatalogConfig>(&s) {
      Ok(cfg) => {
        info!(target: "catalog", %path, courses = cfg.courses.len(), resources = cfg.resources.len(), "Loaded catalog config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "catalog", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "catalog", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_course_bank_toml() {
    let doc = r#"
[[courses]]
id = "rust-intro"
lane = "backend"
title = "Rust for Services"
number = 2

[[courses.exercises]]
id = "cargo-new"
title = "Start a project"
instruction = "Create a new binary crate named api."
placeholder = "Type the command here. Example: cargo new api"
check_for = ["uses cargo new"]

[courses.exercises.expected]
all = ["cargo new"]

[[resources]]
id = "rust-book"
lane = "backend"
title = "The Rust Book"
url = "https://doc.rust-lang.org/book/"
"#;

    let cfg: CatalogConfig = toml::from_str(doc).expect("parse");
    assert_eq!(cfg.courses.len(), 1);

    let course = &cfg.courses[0];
    assert_eq!(course.id.as_deref(), Some("rust-intro"));
    assert_eq!(course.lane, CourseLane::Backend);
    assert_eq!(course.number, Some(2));

    let exercise = &course.exercises[0];
    assert_eq!(exercise.id.as_deref(), Some("cargo-new"));
    let expected = exercise.expected.as_ref().expect("expected rules");
    assert_eq!(expected.all.as_deref(), Some(&["cargo new".to_string()][..]));
    assert!(expected.any.is_none());
    assert!(exercise.success.is_none());

    assert_eq!(cfg.resources.len(), 1);
    assert_eq!(cfg.resources[0].lane, CourseLane::Backend);
  }

  #[test]
  fn empty_document_is_a_valid_empty_bank() {
    let cfg: CatalogConfig = toml::from_str("").expect("parse");
    assert!(cfg.courses.is_empty());
    assert!(cfg.resources.is_empty());
  }
}
