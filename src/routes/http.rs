//! HTTP endpoint handlers. These are thin wrappers that forward to the
//! catalog registry and evaluator; unknown ids map to 404 here, never to
//! errors inside the core.

use std::sync::Arc;
use axum::{extract::{State, Query}, http::StatusCode, Json, response::{IntoResponse, Response}};
use tracing::{info, instrument};

use crate::logic::{evaluate_submission, exercise_answer_checklist, exercise_answer_example};
use crate::protocol::*;
use crate::state::AppState;
use crate::domain::CourseLane;

fn not_found(message: String) -> Response {
  (StatusCode::NOT_FOUND, Json(ErrorOut { message })).into_response()
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_lanes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let lanes = CourseLane::ALL
    .into_iter()
    .map(|lane| LaneOut { lane, courses: state.lane_courses(lane).len() })
    .collect::<Vec<_>>();
  Json(lanes)
}

#[instrument(level = "info", skip(state), fields(lane = q.lane.map(|l| l.as_str()).unwrap_or("all")))]
pub async fn http_get_courses(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LaneQuery>,
) -> impl IntoResponse {
  let courses = match q.lane {
    Some(lane) => state.lane_courses(lane),
    None => state.all_courses(),
  };
  info!(target: "catalog", count = courses.len(), "HTTP course listing served");
  Json(courses.into_iter().map(to_summary).collect::<Vec<_>>())
}

#[instrument(level = "info", skip(state), fields(%q.id))]
pub async fn http_get_course(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CourseQuery>,
) -> Response {
  match state.course(&q.id) {
    Some(course) => {
      info!(target: "catalog", id = %course.id, lane = course.lane.as_str(), "HTTP course detail served");
      Json(to_detail(course)).into_response()
    }
    None => not_found(format!("Unknown course id: {}", q.id)),
  }
}

#[instrument(level = "info", skip(state), fields(%q.course_id, %q.exercise_id))]
pub async fn http_get_example(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ExerciseQuery>,
) -> Response {
  match state.exercise(&q.course_id, &q.exercise_id) {
    Some((_, exercise)) => {
      let example = exercise_answer_example(exercise);
      info!(target: "exercise", id = %exercise.id, has_example = example.is_some(), "HTTP example served");
      Json(ExampleOut { example }).into_response()
    }
    None => not_found(format!("Unknown exercise: {}/{}", q.course_id, q.exercise_id)),
  }
}

#[instrument(level = "info", skip(state), fields(%q.course_id, %q.exercise_id))]
pub async fn http_get_checklist(
  State(state): State<Arc<AppState>>,
  Query(q): Query<ExerciseQuery>,
) -> Response {
  match state.exercise(&q.course_id, &q.exercise_id) {
    Some((_, exercise)) => {
      let checklist = exercise_answer_checklist(exercise);
      info!(target: "exercise", id = %exercise.id, items = checklist.len(), "HTTP checklist served");
      Json(ChecklistOut { checklist }).into_response()
    }
    None => not_found(format!("Unknown exercise: {}/{}", q.course_id, q.exercise_id)),
  }
}

#[instrument(level = "info", skip(state, body), fields(%body.course_id, %body.exercise_id, answer_len = body.answer.len()))]
pub async fn http_post_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> Response {
  match state.exercise(&body.course_id, &body.exercise_id) {
    Some((_, exercise)) => {
      let eval = evaluate_submission(exercise, &body.answer);
      info!(target: "exercise", id = %exercise.id, correct = eval.correct, notes = eval.missing.len(), "HTTP submit_answer evaluated");
      Json(AnswerOut { correct: eval.correct, feedback: eval.feedback, missing: eval.missing })
        .into_response()
    }
    None => not_found(format!("Unknown exercise: {}/{}", body.course_id, body.exercise_id)),
  }
}

#[instrument(level = "info", skip(state), fields(lane = q.lane.map(|l| l.as_str()).unwrap_or("all")))]
pub async fn http_get_resources(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LaneQuery>,
) -> impl IntoResponse {
  let resources = state.resources(q.lane);
  info!(target: "catalog", count = resources.len(), "HTTP resource directory served");
  Json(resources.into_iter().map(to_resource).collect::<Vec<_>>())
}
