//! Data layer: area records, filtering and derived figures.
//!
//! Architecture:
//! ```text
//!   model::reference_areas()        FilterSelection (sidebar)
//!            │                              │
//!            └──────────────┬───────────────┘
//!                           ▼
//!                    ┌─────────────┐
//!                    │   engine    │  filter → FilterOutcome (count, totals, progress)
//!                    └─────────────┘
//!                           │
//!        ┌──────────────┬───┴──────────┬──────────────┐
//!        ▼              ▼              ▼              ▼
//!   indicators        plans        forecast        export
//!   (KPIs, targets)  (operators)  (discoveries,   (csv / json /
//!                                  basin risk)     parquet)
//! ```

pub mod engine;
pub mod export;
pub mod filter;
pub mod forecast;
pub mod indicators;
pub mod model;
pub mod plans;
