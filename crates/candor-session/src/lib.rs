//! # candor-session
//!
//! Wires the pieces together for one submission:
//!
//! 1. [`IntakeForm`] turns form answers into a `CandidateRecord`.
//! 2. [`AssessmentService`] appends it to the record store, scores it, and
//!    runs the counterfactual sweep.
//! 3. The resulting `Assessment` (probability and profile, always together)
//!    can be laid out as a radar chart.

pub mod intake;
pub mod service;

pub use intake::{FieldKind, FormField, IntakeForm};
pub use service::{radar_for, AssessmentService, DefaultAssessmentService};
