//! Type-safe wrappers for NBA stats data.

pub mod ids;
pub mod per_mode;
pub mod time;

pub use ids::PlayerId;
pub use per_mode::PerMode;
pub use time::Season;
