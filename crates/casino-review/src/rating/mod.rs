//! Rating aggregation shared by casino, bonus, and game surfaces.
//!
//! Expert and visitor scores are blended into a single safety index with a
//! stored fallback, category averages are derived from visitor reviews, and
//! category ratings can be turned into pros and cons for review summaries.

mod aggregator;
pub mod display;
mod pros_cons;

pub use aggregator::{
    compute_category_breakdown, compute_safety_index, expert_average, user_average,
    CategoryAveraging, CategoryBreakdown, RatingAggregator, RatingSource, RatingSummary,
};
pub use pros_cons::{
    generate_pros_and_cons, CategoryStatements, ProsAndCons, ProsConsStatements, CON_THRESHOLD,
    PRO_THRESHOLD,
};
