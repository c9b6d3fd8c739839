//! Dashboard tables and the report that carries them.
//!
//! This module handles:
//! - Building every table the dashboard renders
//! - The versioned report schema handed to the renderer
//! - A plain-text KPI summary

pub mod schema;
pub mod summary;
pub mod tables;

// Re-export main types and functions
pub use schema::Report;
pub use summary::render_summary;
pub use tables::{DashboardTables, ProjectHighlight, SubCategoryBreakdown, TableOptions};
