//! Workspace-level integration test package. The tests live in `tests/`.
