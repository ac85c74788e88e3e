//! Series references shared by books

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a series in the source collection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SeriesId(pub u64);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered grouping of books
///
/// Two series are the same series when their ids match, whatever their names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
}

impl Series {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: SeriesId(id),
            name: name.into(),
        }
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Series {}

impl Hash for Series {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_by_id() {
        let a = Series::new(7, "Discworld");
        let renamed = Series::new(7, "Disc World");
        let other = Series::new(8, "Discworld");

        assert_eq!(a, renamed);
        assert_ne!(a, other);

        let set: HashSet<Series> = [a, renamed, other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
