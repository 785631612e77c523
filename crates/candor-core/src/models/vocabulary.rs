use serde::{Deserialize, Serialize};

use super::Attribute;

/// Ordered registry of categorical attributes and their legal values.
///
/// Read-only once built: the sensitivity sweep enumerates it but never
/// changes it. Iteration order is configuration order and drives the order of
/// every score report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainVocabulary {
    attributes: Vec<Attribute>,
}

impl DomainVocabulary {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    pub fn get(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::id)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Sum of legal-value counts across all attributes.
    pub fn total_values(&self) -> usize {
        self.attributes.iter().map(|a| a.values().len()).sum()
    }
}

impl<'a> IntoIterator for &'a DomainVocabulary {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<Attribute> for DomainVocabulary {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
