//! Integration tests against a live test database.
//!
//! Requires a PostgreSQL instance reachable via `TEST_DATABASE_URL`
//! (defaults to the docker-compose test instance on port 5433).

mod common;

mod quiz_tests;
