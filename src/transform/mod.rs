//! Data transformation layer
//!
//! Pure functions turning source data into display-ready structures:
//!
//! - **rank**: orders country snapshots for the table
//! - **delta**: turns cumulative series into daily chart points
//! - **format**: renders counts for tiles, tooltips and axis ticks
//!
//! Nothing here does I/O or holds state; every call allocates its own output
//! and leaves its inputs untouched.

pub mod delta;
pub mod format;
pub mod rank;

pub use delta::{series_deltas, to_deltas};
pub use format::{
    format_compact, format_delta, pretty_print_stat, pretty_print_today, with_separators,
};
pub use rank::{rank, rank_by};
