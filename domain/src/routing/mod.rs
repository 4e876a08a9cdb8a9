//! Keyword routing domain
//!
//! Maps free question text to discrete outcomes without any language
//! understanding. Four independent tables live here:
//!
//! - [`topic`]: the topic classifier ([`classify`])
//! - [`clarification`]: the follow-up question selector ([`needs_clarification`])
//! - [`institution`]: the institution router ([`route`])
//! - [`title`]: the history title summarizer ([`make_title`])
//!
//! Each table is an ordered list of [`KeywordRule`]s evaluated top to bottom,
//! first match wins. The tables overlap in vocabulary but are tuned
//! separately and must not be merged: a question may legitimately get a
//! display title that differs from its topic or from the institutions it is
//! routed to.

pub mod clarification;
pub mod institution;
mod rule;
pub mod title;
pub mod topic;

pub use clarification::needs_clarification;
pub use institution::{DIRECTORY, Institution, route};
pub use rule::{KeywordRule, first_match, normalize};
pub use title::make_title;
pub use topic::{Topic, classify};
