// Core algorithm exports
pub mod commonality;
pub mod dimensions;
pub mod filters;
pub mod matcher;
pub mod personality;
pub mod scoring;

pub use commonality::{id_set, shared, Identified};
pub use dimensions::{normalize, Axis, DimensionError, DimensionMap, Pole};
pub use filters::{is_eligible, retain_eligible};
pub use matcher::{calculate_matches, MatchError};
pub use personality::{personality_score, total_distance};
pub use scoring::{combined_score, interest_and_tag_percent, normalize_count};
