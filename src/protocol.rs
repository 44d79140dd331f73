//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseExercise, CourseLane, Resource};
use crate::logic;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Lanes,
    ListCourses {
        lane: Option<CourseLane>,
    },
    GetCourse {
        #[serde(rename = "courseId")]
        course_id: String,
    },
    ExerciseExample {
        #[serde(rename = "courseId")]
        course_id: String,
        #[serde(rename = "exerciseId")]
        exercise_id: String,
    },
    ExerciseChecklist {
        #[serde(rename = "courseId")]
        course_id: String,
        #[serde(rename = "exerciseId")]
        exercise_id: String,
    },
    SubmitAnswer {
        #[serde(rename = "courseId")]
        course_id: String,
        #[serde(rename = "exerciseId")]
        exercise_id: String,
        answer: String,
    },
    ListResources {
        lane: Option<CourseLane>,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Lanes {
        lanes: Vec<LaneOut>,
    },
    Courses {
        courses: Vec<CourseSummaryOut>,
    },
    Course {
        course: CourseDetailOut,
    },
    Example {
        example: Option<String>,
    },
    Checklist {
        checklist: Vec<String>,
    },
    AnswerResult {
        correct: bool,
        feedback: String,
        missing: Vec<String>,
    },
    Resources {
        resources: Vec<ResourceOut>,
    },
    Error {
        message: String,
    },
}

/// One lane with its course count.
#[derive(Debug, Serialize)]
pub struct LaneOut {
    pub lane: CourseLane,
    pub courses: usize,
}

/// Catalog listing entry.
#[derive(Debug, Serialize)]
pub struct CourseSummaryOut {
    pub id: String,
    pub lane: CourseLane,
    pub title: String,
    pub number: Option<u32>,
}

/// Exercise as delivered to clients. `example` and `checklist` are derived
/// from the authored placeholder/check_for at serialization time; the
/// grading rules themselves stay server-side.
#[derive(Debug, Serialize)]
pub struct ExerciseOut {
    pub id: String,
    pub title: String,
    pub instruction: String,
    pub details: Vec<String>,
    pub placeholder: Option<String>,
    pub example: Option<String>,
    pub checklist: Vec<String>,
}

/// Full course as delivered to clients.
#[derive(Debug, Serialize)]
pub struct CourseDetailOut {
    pub id: String,
    pub lane: CourseLane,
    pub title: String,
    pub number: Option<u32>,
    pub overview: String,
    pub outcomes: Vec<String>,
    pub exercises: Vec<ExerciseOut>,
}

/// Resource directory entry.
#[derive(Debug, Serialize)]
pub struct ResourceOut {
    pub id: String,
    pub lane: CourseLane,
    pub title: String,
    pub url: String,
    pub blurb: String,
}

/// Convert a course to its listing DTO.
pub fn to_summary(c: &Course) -> CourseSummaryOut {
    CourseSummaryOut {
        id: c.id.clone(),
        lane: c.lane,
        title: c.title.clone(),
        number: c.number,
    }
}

/// Convert an exercise to its public DTO, deriving example and checklist.
pub fn to_exercise(e: &CourseExercise) -> ExerciseOut {
    ExerciseOut {
        id: e.id.clone(),
        title: e.title.clone(),
        instruction: e.instruction.clone(),
        details: e.details.clone(),
        placeholder: e.placeholder.clone(),
        example: logic::exercise_answer_example(e),
        checklist: logic::exercise_answer_checklist(e),
    }
}

/// Convert a full course (with exercises) to the detail DTO.
pub fn to_detail(c: &Course) -> CourseDetailOut {
    CourseDetailOut {
        id: c.id.clone(),
        lane: c.lane,
        title: c.title.clone(),
        number: c.number,
        overview: c.overview.clone(),
        outcomes: c.outcomes.clone(),
        exercises: c.exercises.iter().map(to_exercise).collect(),
    }
}

/// Convert a resource to its public DTO.
pub fn to_resource(r: &Resource) -> ResourceOut {
    ResourceOut {
        id: r.id.clone(),
        lane: r.lane,
        title: r.title.clone(),
        url: r.url.clone(),
        blurb: r.blurb.clone(),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct LaneQuery {
    pub lane: Option<CourseLane>,
}

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseQuery {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "exerciseId")]
    pub exercise_id: String,
}

#[derive(Deserialize)]
pub struct AnswerIn {
    #[serde(rename = "courseId")]
    pub course_id: String,
    #[serde(rename = "exerciseId")]
    pub exercise_id: String,
    pub answer: String,
}
#[derive(Serialize)]
pub struct AnswerOut {
    pub correct: bool,
    pub feedback: String,
    pub missing: Vec<String>,
}

#[derive(Serialize)]
pub struct ExampleOut {
    pub example: Option<String>,
}

#[derive(Serialize)]
pub struct ChecklistOut {
    pub checklist: Vec<String>,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}
