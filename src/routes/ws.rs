//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to the catalog/evaluator. We reply with a single JSON message per
//! request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::domain::CourseLane;
use crate::logic::{evaluate_submission, exercise_answer_checklist, exercise_answer_example};
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::protocol::{to_detail, to_resource, to_summary, LaneOut};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "courselane_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "courselane_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "courselane_backend", raw = %trunc_for_log(&txt, 256), "WS received");
            handle_client_ws(incoming, &state)
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "courselane_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "courselane_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Lanes => {
      let lanes = CourseLane::ALL
        .into_iter()
        .map(|lane| LaneOut { lane, courses: state.lane_courses(lane).len() })
        .collect();
      ServerWsMessage::Lanes { lanes }
    }

    ClientWsMessage::ListCourses { lane } => {
      let courses = match lane {
        Some(lane) => state.lane_courses(lane),
        None => state.all_courses(),
      };
      tracing::info!(target: "catalog", count = courses.len(), "WS course listing served");
      ServerWsMessage::Courses { courses: courses.into_iter().map(to_summary).collect() }
    }

    ClientWsMessage::GetCourse { course_id } => match state.course(&course_id) {
      Some(course) => {
        tracing::info!(target: "catalog", id = %course.id, "WS course detail served");
        ServerWsMessage::Course { course: to_detail(course) }
      }
      None => ServerWsMessage::Error { message: format!("Unknown course id: {}", course_id) },
    },

    ClientWsMessage::ExerciseExample { course_id, exercise_id } => {
      match state.exercise(&course_id, &exercise_id) {
        Some((_, exercise)) => {
          ServerWsMessage::Example { example: exercise_answer_example(exercise) }
        }
        None => ServerWsMessage::Error {
          message: format!("Unknown exercise: {}/{}", course_id, exercise_id),
        },
      }
    }

    ClientWsMessage::ExerciseChecklist { course_id, exercise_id } => {
      match state.exercise(&course_id, &exercise_id) {
        Some((_, exercise)) => {
          ServerWsMessage::Checklist { checklist: exercise_answer_checklist(exercise) }
        }
        None => ServerWsMessage::Error {
          message: format!("Unknown exercise: {}/{}", course_id, exercise_id),
        },
      }
    }

    ClientWsMessage::SubmitAnswer { course_id, exercise_id, answer } => {
      match state.exercise(&course_id, &exercise_id) {
        Some((_, exercise)) => {
          let eval = evaluate_submission(exercise, &answer);
          tracing::info!(target: "exercise", id = %exercise.id, correct = eval.correct, "WS submit_answer evaluated");
          ServerWsMessage::AnswerResult {
            correct: eval.correct,
            feedback: eval.feedback,
            missing: eval.missing,
          }
        }
        None => ServerWsMessage::Error {
          message: format!("Unknown exercise: {}/{}", course_id, exercise_id),
        },
      }
    }

    ClientWsMessage::ListResources { lane } => {
      let resources = state.resources(lane).into_iter().map(to_resource).collect();
      ServerWsMessage::Resources { resources }
    }
  }
}
