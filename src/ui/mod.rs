//! Rendering layer: every function here reads [`crate::state::AppState`]
//! and draws; only the sidebar writes the selection back.

pub mod forecast;
pub mod indicators;
pub mod kpi;
pub mod map;
pub mod panels;
pub mod plans;
