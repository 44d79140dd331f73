//! Courselane · Course Catalog & Exercise Backend
//!
//! A read-only course catalog grouped into six lanes, served over HTTP and
//! WebSocket, with a pure evaluator that derives example answers and
//! requirement checklists from exercise definitions and grades free-text
//! submissions against keyword rules.

pub mod telemetry;
pub mod util;
pub mod domain;
pub mod config;
pub mod catalog;
pub mod state;
pub mod protocol;
pub mod logic;
pub mod routes;
