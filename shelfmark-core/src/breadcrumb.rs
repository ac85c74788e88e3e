//! Navigation paths from the catalog root to a page

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a navigation path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    pub link: String,
}

/// Ordered (title, link) path from the catalog root
///
/// Appending never touches the receiver: every call returns a new path, so a
/// parent can hand the same path to each of its children.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Breadcrumbs(Vec<Crumb>);

impl Breadcrumbs {
    /// Empty path (the catalog root)
    pub fn new() -> Self {
        Self::default()
    }

    /// Return this path extended with one more step
    pub fn append(&self, title: impl Into<String>, link: impl Into<String>) -> Self {
        let mut crumbs = Vec::with_capacity(self.0.len() + 1);
        crumbs.extend_from_slice(&self.0);
        crumbs.push(Crumb {
            title: title.into(),
            link: link.into(),
        });
        Self(crumbs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Crumb> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Crumb> {
        self.0.last()
    }
}

/// Titles joined with ` > `, as shown to the progress sink
impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, crumb) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(&crumb.title)?;
        }
        Ok(())
    }
}
