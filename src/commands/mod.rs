//! Command implementations

pub mod compare;
pub mod counts;
pub mod interactive;
pub mod official;

pub use compare::run_compare;
pub use counts::run_counts;
pub use interactive::run_interactive;
pub use official::run_official;
