//! Collector components: descriptor loading, subtree walk, traversal.

pub mod collector;
pub mod descriptor;
pub mod walk;

pub use collector::{collect_from, collect_into, record_candidates};
pub use descriptor::{Descriptor, load_descriptor, parse_descriptor};
pub use walk::{ExpansionScan, WalkOutcome, scan_expansion_root, to_outcome_walkdir};
