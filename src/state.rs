//! Application state: the read-only course registry and resource directory.
//!
//! This module owns:
//!   - the course index (by id) and per-lane display ordering
//!   - conversion of TOML bank entries into domain records
//!   - the resource directory
//!
//! The registry is built once at startup from the optional TOML bank plus the
//! built-in seeds, and is never mutated afterwards. Shared access is plain
//! `Arc` with no locks: immutability makes concurrent lookups safe on its own.

use std::collections::HashMap;

use tracing::{error, info, instrument, warn};

use crate::catalog::{seed_courses, seed_resources};
use crate::config::{load_catalog_config_from_env, CourseCfg, ExerciseCfg, ResourceCfg};
use crate::domain::{Course, CourseExercise, CourseLane, ExpectedTerms, Resource};

const DEFAULT_SUCCESS: &str = "Looks good. That meets the requirements.";
const DEFAULT_FAILURE: &str = "Not yet. Check the requirements and try again.";

pub struct AppState {
    by_id: HashMap<String, Course>,
    /// Course ids per lane, in display order (course number, unnumbered last).
    lane_order: HashMap<CourseLane, Vec<String>>,
    resources: Vec<Resource>,
}

impl AppState {
    /// Build the registry: load the TOML bank, merge built-in seeds, index by
    /// id and lane, and log the startup inventory.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg_opt = load_catalog_config_from_env();

        let mut by_id = HashMap::<String, Course>::new();
        let mut insertion = Vec::<String>::new();
        let mut bank_count = 0usize;

        // Bank entries first; a later duplicate id never displaces an earlier one.
        if let Some(cfg) = &cfg_opt {
            for cc in &cfg.courses {
                match course_from_cfg(cc) {
                    Some(course) => {
                        if by_id.contains_key(&course.id) {
                            warn!(target: "catalog", id = %course.id, "Duplicate course id in bank; keeping the first");
                            continue;
                        }
                        insertion.push(course.id.clone());
                        bank_count += 1;
                        by_id.insert(course.id.clone(), course);
                    }
                    None => continue,
                }
            }
        }

        // Built-in seeds fill in behind the bank, never overwriting.
        let mut seed_count = 0usize;
        for course in seed_courses() {
            if by_id.contains_key(&course.id) {
                continue;
            }
            insertion.push(course.id.clone());
            seed_count += 1;
            by_id.insert(course.id.clone(), course);
        }

        // Per-lane display order: course number ascending, unnumbered last,
        // insertion order as the tiebreak (the sort is stable).
        let mut lane_order = HashMap::<CourseLane, Vec<String>>::new();
        for lane in CourseLane::ALL {
            let mut ids: Vec<&String> = insertion
                .iter()
                .filter(|id| by_id[*id].lane == lane)
                .collect();
            ids.sort_by_key(|id| by_id[*id].number.unwrap_or(u32::MAX));
            lane_order.insert(lane, ids.into_iter().cloned().collect());
        }

        for lane in CourseLane::ALL {
            let courses = lane_order[&lane].len();
            let exercises: usize = lane_order[&lane]
                .iter()
                .map(|id| by_id[id].exercises.len())
                .sum();
            info!(target: "catalog", lane = lane.as_str(), courses, exercises, "Startup catalog inventory");
        }
        info!(target: "catalog", bank = bank_count, seed = seed_count, "Catalog sources");

        let mut resources: Vec<Resource> = cfg_opt
            .as_ref()
            .map(|c| c.resources.iter().filter_map(resource_from_cfg).collect())
            .unwrap_or_default();
        for r in seed_resources() {
            if resources.iter().any(|existing: &Resource| existing.id == r.id) {
                continue;
            }
            resources.push(r);
        }

        Self {
            by_id,
            lane_order,
            resources,
        }
    }

    /// Read-only access to a course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id)
    }

    /// One lane's courses in display order.
    pub fn lane_courses(&self, lane: CourseLane) -> Vec<&Course> {
        self.lane_order
            .get(&lane)
            .map(|ids| ids.iter().map(|id| &self.by_id[id]).collect())
            .unwrap_or_default()
    }

    /// Every course, lanes in presentation order.
    pub fn all_courses(&self) -> Vec<&Course> {
        CourseLane::ALL
            .into_iter()
            .flat_map(|lane| self.lane_courses(lane))
            .collect()
    }

    /// Look up one exercise within one course.
    pub fn exercise(&self, course_id: &str, exercise_id: &str) -> Option<(&Course, &CourseExercise)> {
        let course = self.course(course_id)?;
        let exercise = course.exercises.iter().find(|e| e.id == exercise_id)?;
        Some((course, exercise))
    }

    /// Resource directory, optionally filtered to one lane.
    pub fn resources(&self, lane: Option<CourseLane>) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| lane.map(|l| r.lane == l).unwrap_or(true))
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one bank course, skipping it (with an error log) when malformed.
fn course_from_cfg(cc: &CourseCfg) -> Option<Course> {
    let id = match &cc.id {
        Some(id) if !id.trim().is_empty() => id.clone(),
        _ => {
            error!(target: "catalog", title = %cc.title, "Skipping bank course: missing id");
            return None;
        }
    };

    let mut exercises = Vec::new();
    for ec in &cc.exercises {
        match exercise_from_cfg(&id, ec) {
            Some(ex) => {
                if exercises.iter().any(|prev: &CourseExercise| prev.id == ex.id) {
                    error!(target: "catalog", course = %id, exercise = %ex.id, "Skipping bank exercise: duplicate id within course");
                    continue;
                }
                exercises.push(ex);
            }
            None => continue,
        }
    }

    Some(Course {
        id,
        lane: cc.lane,
        title: cc.title.clone(),
        number: cc.number,
        overview: cc.overview.clone().unwrap_or_default(),
        outcomes: cc.outcomes.clone(),
        exercises,
    })
}

fn exercise_from_cfg(course_id: &str, ec: &ExerciseCfg) -> Option<CourseExercise> {
    let id = match &ec.id {
        Some(id) if !id.trim().is_empty() => id.clone(),
        _ => {
            error!(target: "catalog", course = %course_id, title = %ec.title, "Skipping bank exercise: missing id");
            return None;
        }
    };

    Some(CourseExercise {
        id,
        title: ec.title.clone(),
        instruction: ec.instruction.clone(),
        details: ec.details.clone(),
        placeholder: ec.placeholder.clone(),
        expected: ec.expected.as_ref().and_then(sanitize_expected),
        check_for: ec.check_for.clone(),
        success: ec.success.clone().unwrap_or_else(|| DEFAULT_SUCCESS.into()),
        failure: ec.failure.clone().unwrap_or_else(|| DEFAULT_FAILURE.into()),
    })
}

/// Enforce the rule-set invariant: present slots hold non-empty terms.
/// Blank terms are dropped; a slot left empty collapses to absent.
fn sanitize_expected(rules: &ExpectedTerms) -> Option<ExpectedTerms> {
    let clean = |slot: &Option<Vec<String>>| -> Option<Vec<String>> {
        let terms: Vec<String> = slot
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            None
        } else {
            Some(terms)
        }
    };

    let all = clean(&rules.all);
    let any = clean(&rules.any);
    if all.is_none() && any.is_none() {
        None
    } else {
        Some(ExpectedTerms { all, any })
    }
}

fn resource_from_cfg(rc: &ResourceCfg) -> Option<Resource> {
    let id = match &rc.id {
        Some(id) if !id.trim().is_empty() => id.clone(),
        _ => {
            error!(target: "catalog", title = %rc.title, "Skipping bank resource: missing id");
            return None;
        }
    };
    Some(Resource {
        id,
        lane: rc.lane,
        title: rc.title.clone(),
        url: rc.url.clone(),
        blurb: rc.blurb.clone().unwrap_or_default(),
    })
}
