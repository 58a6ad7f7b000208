//! Shared helpers for promptline-axum integration tests.

pub mod fakes;
