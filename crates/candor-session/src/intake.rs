//! Intake form schema derived from configuration.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use candor_core::config::{AttributeConfig, CandorConfig};
use candor_core::errors::IntakeError;
use candor_core::models::humanize_label;
use candor_core::CandidateRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Constrained choice. `scored` selections belong to the vocabulary and
    /// appear on the radar.
    Selection { options: Vec<String>, scored: bool },
    /// Stored verbatim; an unanswered field is stored as empty text.
    FreeText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The questions shown to a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntakeForm {
    fields: Vec<FormField>,
}

impl IntakeForm {
    /// Free-text fields first, then the scored vocabulary in order, then the
    /// unscored selections.
    pub fn from_config(config: &CandorConfig) -> Self {
        let mut fields = Vec::new();

        for field in &config.intake.free_text {
            fields.push(FormField {
                id: field.id.clone(),
                prompt: field
                    .prompt
                    .clone()
                    .unwrap_or_else(|| humanize_label(&field.id)),
                kind: FieldKind::FreeText,
            });
        }
        for attribute in &config.vocabulary.attributes {
            fields.push(selection(attribute, true));
        }
        for attribute in &config.intake.selections {
            fields.push(selection(attribute, false));
        }

        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Build a record from answers keyed by field id.
    ///
    /// Every selection must be answered with one of its options. Answers for
    /// fields the form does not have are rejected.
    pub fn submit<I, K, V>(&self, answers: I) -> Result<CandidateRecord, IntakeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let answers: BTreeMap<String, String> = answers
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let known: HashSet<&str> = self.fields.iter().map(|f| f.id.as_str()).collect();
        if let Some(unknown) = answers.keys().find(|k| !known.contains(k.as_str())) {
            return Err(IntakeError::UnknownField {
                field: unknown.clone(),
            });
        }

        let mut record = CandidateRecord::new();
        for field in &self.fields {
            let answer = answers.get(&field.id);
            match &field.kind {
                FieldKind::FreeText => {
                    record.set(field.id.clone(), answer.cloned().unwrap_or_default());
                }
                FieldKind::Selection { options, .. } => {
                    let value = answer.ok_or_else(|| IntakeError::MissingField {
                        field: field.id.clone(),
                    })?;
                    if !options.contains(value) {
                        return Err(IntakeError::InvalidOption {
                            field: field.id.clone(),
                            value: value.clone(),
                        });
                    }
                    record.set(field.id.clone(), value.clone());
                }
            }
        }
        Ok(record)
    }
}

fn selection(attribute: &AttributeConfig, scored: bool) -> FormField {
    FormField {
        id: attribute.id.clone(),
        prompt: attribute
            .prompt
            .clone()
            .unwrap_or_else(|| humanize_label(&attribute.id)),
        kind: FieldKind::Selection {
            options: attribute.values.clone(),
            scored,
        },
    }
}
