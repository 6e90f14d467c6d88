//! Workspace-level golden tests for the basics crates live in `tests/`.
