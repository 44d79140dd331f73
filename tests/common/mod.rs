//! Common test utilities for integration tests.
//!
//! The catalog registry is in-memory and seeded at construction, so tests
//! need no external services: build the real router, wrap it in a TestServer.

use std::sync::Arc;

use axum_test::TestServer;

use courselane_backend::routes::build_router;
use courselane_backend::state::AppState;

/// Spin up a TestServer over the real router with the seed catalog.
pub fn server() -> TestServer {
    let state = Arc::new(AppState::new());
    TestServer::new(build_router(state)).expect("failed to build test server")
}
