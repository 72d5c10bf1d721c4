//! Unit tests for the weightvar CLI runtime.
