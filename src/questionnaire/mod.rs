//! The bilingual knowledge-base onboarding questionnaire.
//!
//! The questionnaire collects the business knowledge a ChatFlow360 AI
//! assistant needs before it can answer visitor questions: what the
//! business does, its services, pricing, location, contact details, and
//! the questions customers ask most. Every prompt appears in English with
//! its Spanish counterpart directly beneath it.
//!
//! [`content`] holds the fixed content plan; [`builder`] walks it and
//! appends the styled blocks to a document in a single forward pass.

pub mod builder;
pub mod content;

pub use builder::{QuestionnaireBuilder, generate};
