// Core algorithm exports
pub mod conversation;
pub mod filters;
pub mod matcher;
pub mod presenter;
pub mod prompts;

pub use conversation::{parse_ielts, transition, Effect, Event, Keyboard, TransitionError, TransitionResult};
pub use filters::{matches_major, meets_gpa_requirement};
pub use matcher::{build_query, MatchError, MatchResult, Matcher};
pub use presenter::format_matches;
