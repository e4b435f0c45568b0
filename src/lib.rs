pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::aggregate::OutcomeTable;
pub use core::buckets::{Buckets, bucketize, star_count};
pub use core::events::parse_events;
pub use core::main_shared::run_main;
pub use core::report::{render_report, replace_between_markers};
pub use core::status::resolve;
