//! API Route Handlers
//!
//! Each module contains handlers for a specific widget.

pub mod chart;
pub mod countries;
pub mod dashboard;
pub mod health;
pub mod map;
pub mod summary;
pub mod table;
