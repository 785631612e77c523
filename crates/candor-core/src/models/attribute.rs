use serde::{Deserialize, Serialize};

/// A categorical dimension of a candidate record with a closed, ordered set
/// of legal values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    id: String,
    values: Vec<String>,
}

impl Attribute {
    pub fn new<I, V>(id: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            id: id.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Record key of this attribute.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Legal values in configuration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Human-readable label used as the score report key.
    pub fn label(&self) -> String {
        humanize_label(&self.id)
    }
}

/// Underscores become spaces, then every word is title-cased: the first
/// letter after a non-letter is upper-cased, the rest lower-cased.
///
/// `"language_level"` becomes `"Language Level"`.
pub fn humanize_label(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut prev_is_letter = false;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}
