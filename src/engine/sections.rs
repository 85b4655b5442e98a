use crate::config::SectionSpec;
use crate::error::{Error, Result};

/// Immutable, non-empty, ordered list of sections.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionList {
    sections: Vec<SectionSpec>,
}

impl SectionList {
    pub fn new(sections: Vec<SectionSpec>) -> Result<Self> {
        if sections.is_empty() {
            return Err(Error::EmptySections);
        }
        Ok(Self { sections })
    }

    /// Convenience for lists of bare names with no body text.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| SectionSpec {
                    name: name.into(),
                    paragraphs: Vec::new(),
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.sections.len()
    }

    pub fn get(&self, index: usize) -> Option<&SectionSpec> {
        self.sections.get(index)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SectionSpec> {
        self.sections.iter()
    }

    /// Index one step forward, or `None` at the last section.
    pub fn next(&self, index: usize) -> Option<usize> {
        (index < self.last_index()).then(|| index + 1)
    }

    /// Index one step back, or `None` at the first section.
    pub fn previous(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }
}
