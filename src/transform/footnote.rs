use std::fmt::{Display, Formatter};

/// A numbered reference lifted out of an inline link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub index: usize,
    pub target: String,
}

impl Display for Footnote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.index, self.target)
    }
}

/// Append-only footnote sequence. `index` is always the 1-based position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footnotes {
    entries: Vec<Footnote>,
}

impl Footnotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a target and returns its index.
    pub fn push(&mut self, target: impl Into<String>) -> usize {
        let index = self.entries.len() + 1;
        self.entries.push(Footnote {
            index,
            target: target.into(),
        });
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Footnote> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Footnote] {
        &self.entries
    }
}
