//! Prompt domain
//!
//! The fixed system instruction and the per-question context sent to the
//! language model.

mod template;

pub use template::PromptTemplate;
