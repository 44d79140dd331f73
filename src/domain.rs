//! Domain models used by the backend: lanes, courses, exercises, and resources.

use serde::{Deserialize, Serialize};

/// Subject-area track grouping courses. Closed set; the serialized names are
/// referenced by external links, so renaming a variant is a breaking change.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CourseLane {
  Foundation,
  Frontend,
  Backend,
  AiDataScience,
  Career,
  CareerDevops,
}

impl CourseLane {
  /// Every lane, in the order they are presented to learners.
  pub const ALL: [CourseLane; 6] = [
    CourseLane::Foundation,
    CourseLane::Frontend,
    CourseLane::Backend,
    CourseLane::AiDataScience,
    CourseLane::Career,
    CourseLane::CareerDevops,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      CourseLane::Foundation => "foundation",
      CourseLane::Frontend => "frontend",
      CourseLane::Backend => "backend",
      CourseLane::AiDataScience => "ai-data-science",
      CourseLane::Career => "career",
      CourseLane::CareerDevops => "career-devops",
    }
  }
}

/// Keyword rules a correct answer must satisfy.
/// `all`: every listed term must appear. `any`: at least one must appear.
/// Both slots are optional; when present they hold non-empty terms.
#[derive(Clone, Debug, Deserialize, Default, Serialize)]
pub struct ExpectedTerms {
  #[serde(default)] pub all: Option<Vec<String>>,
  #[serde(default)] pub any: Option<Vec<String>>,
}

/// One graded free-text exercise within a course.
///
/// `check_for` is the human-readable checklist and is stored independently of
/// `expected`; nothing ties the two together, matching the authored content.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CourseExercise {
  pub id: String,
  pub title: String,
  pub instruction: String,
  #[serde(default)] pub details: Vec<String>,

  /// Hint text shown in the empty input field. May embed a labeled example
  /// ("... Example: git status") that the evaluator extracts.
  #[serde(default)] pub placeholder: Option<String>,
  #[serde(default)] pub expected: Option<ExpectedTerms>,
  #[serde(default)] pub check_for: Option<Vec<String>>,

  pub success: String,
  pub failure: String,
}

/// A course in the catalog. Ids are author-assigned and must stay stable
/// across content revisions, since external bookmarks reference them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
  pub id: String,
  pub lane: CourseLane,
  pub title: String,
  #[serde(default)] pub number: Option<u32>,

  #[serde(default)] pub overview: String,
  #[serde(default)] pub outcomes: Vec<String>,
  #[serde(default)] pub exercises: Vec<CourseExercise>,
}

/// External learning resource listed in the read-only directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
  pub id: String,
  pub lane: CourseLane,
  pub title: String,
  pub url: String,
  #[serde(default)] pub blurb: String,
}
