//! Core evaluation behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Separating a displayable example answer from placeholder boilerplate
//!   - Rejecting generic instructional text so it is never shown as an example
//!   - Deriving the requirement checklist for an exercise
//!   - Grading a learner submission against the exercise keyword rules
//!
//! Everything here is pure and total: no I/O, no state, and "no usable
//! example" is an ordinary `None`, never an error.

use crate::domain::CourseExercise;
use crate::util::{contains_ignore_case, find_ignore_case};

/// Marker separating instructional boilerplate from the illustrative answer.
const EXAMPLE_MARKER: &str = "example:";

/// Instructional boilerplate phrases. A candidate containing any of these
/// (case-insensitive, substring) is not a real example.
const GENERIC_PLACEHOLDER_PHRASES: [&str; 9] = [
  "type the command here",
  "type your answer",
  "type the answer",
  "enter your answer",
  "write your answer",
  "type here",
  "your answer",
  "add your answer",
  "answer here",
];

/// Split the illustrative answer out of a placeholder.
///
/// Placeholders are often phrased as "Type the command here. Example: git
/// status". Returns the trimmed text after the first `example:` marker
/// (any case, newlines included); without a marker, the whole placeholder
/// trimmed. First occurrence only, no fallback chain.
pub fn extract_placeholder_example(placeholder: &str) -> &str {
  match find_ignore_case(placeholder, EXAMPLE_MARKER) {
    Some((_, end)) => placeholder[end..].trim(),
    None => placeholder.trim(),
  }
}

/// True if the candidate is generic instructional boilerplate rather than a
/// real example answer.
pub fn is_generic_placeholder(candidate: &str) -> bool {
  GENERIC_PLACEHOLDER_PHRASES
    .iter()
    .any(|phrase| contains_ignore_case(candidate, phrase))
}

/// Displayable example answer for an exercise, if it has one.
///
/// Showing boilerplate as if it were a real example would mislead learners
/// into thinking the instructional text is the answer, so anything generic
/// comes back as `None`.
pub fn exercise_answer_example(exercise: &CourseExercise) -> Option<String> {
  let placeholder = exercise.placeholder.as_deref()?.trim();
  if placeholder.is_empty() {
    return None;
  }
  let candidate = extract_placeholder_example(placeholder);
  if candidate.is_empty() || is_generic_placeholder(candidate) {
    return None;
  }
  Some(candidate.to_string())
}

/// User-facing checklist for an exercise: `check_for` entries trimmed, blanks
/// dropped, order preserved. Purely a display-list derivation; no checking
/// against any submission happens here.
pub fn exercise_answer_checklist(exercise: &CourseExercise) -> Vec<String> {
  exercise
    .check_for
    .as_deref()
    .unwrap_or_default()
    .iter()
    .map(|entry| entry.trim())
    .filter(|entry| !entry.is_empty())
    .map(str::to_string)
    .collect()
}

/// Outcome of grading one submission against one exercise.
#[derive(Clone, Debug)]
pub struct Evaluation {
  pub correct: bool,
  /// Notes on what kept the submission from passing (missing terms etc.).
  pub missing: Vec<String>,
  /// The exercise's own success/failure copy, per outcome.
  pub feedback: String,
}

/// Grade a raw submission against the exercise keyword rules.
///
/// A submission fails when it is blank, when it merely restates the
/// placeholder hint text, when any `expected.all` term is absent, or when
/// none of the `expected.any` terms appear. Term matching is
/// case-insensitive substring search.
pub fn evaluate_submission(exercise: &CourseExercise, answer: &str) -> Evaluation {
  let answer = answer.trim();
  let mut notes = vec![];

  if answer.is_empty() {
    notes.push("Nothing submitted".to_string());
  } else if let Some(ph) = exercise.placeholder.as_deref() {
    let ph = ph.trim();
    if !ph.is_empty() && answer.to_lowercase() == ph.to_lowercase() {
      notes.push("Restates the hint text instead of answering".to_string());
    }
  }

  if notes.is_empty() {
    if let Some(rules) = &exercise.expected {
      if let Some(required) = &rules.all {
        for term in required {
          if !contains_ignore_case(answer, term) {
            notes.push(format!("Missing '{}'", term));
          }
        }
      }
      if let Some(choices) = &rules.any {
        let hit = choices.iter().any(|term| contains_ignore_case(answer, term));
        if !hit && !choices.is_empty() {
          notes.push(format!("Include at least one of: {}", choices.join(", ")));
        }
      }
    }
  }

  let correct = notes.is_empty();
  let feedback = if correct { exercise.success.clone() } else { exercise.failure.clone() };
  Evaluation { correct, missing: notes, feedback }
}
