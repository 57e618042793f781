//! End-to-end tests for the assembled Scribe server; see `tests/`
