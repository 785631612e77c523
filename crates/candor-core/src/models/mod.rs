mod assessment;
mod attribute;
mod candidate;
mod probability;
mod score_report;
mod stored_record;
mod vocabulary;

pub use assessment::Assessment;
pub use attribute::{humanize_label, Attribute};
pub use candidate::CandidateRecord;
pub use probability::OutcomeProbability;
pub use score_report::{AttributeScore, ScoreReport};
pub use stored_record::StoredRecord;
pub use vocabulary::DomainVocabulary;
