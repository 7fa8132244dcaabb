// SPDX-License-Identifier: MPL-2.0
//! Structural patterns for locating elements in a [`Document`].
//!
//! The supported grammar is the subset needed to describe "a container with
//! a nested region": compound selectors made of an optional tag name (or
//! `*`) followed by any number of `.class` parts, joined by the descendant
//! combinator (whitespace).
//!
//! ```
//! use flash_cues::page::Selector;
//!
//! let selector: Selector = ".toast .msg".parse().unwrap();
//! assert_eq!(selector.as_str(), ".toast .msg");
//! ```

use super::{Document, NodeId};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(part: &str) -> Result<Self> {
        let mut pieces = part.split('.');
        // `split` always yields at least one piece
        let head = pieces.next().unwrap_or_default();

        let tag = match head {
            "" | "*" => None,
            name => {
                validate_ident(name, part)?;
                Some(name.to_ascii_lowercase())
            }
        };

        let mut classes = Vec::new();
        for class in pieces {
            if class.is_empty() {
                return Err(Error::Selector(format!("empty class name in `{part}`")));
            }
            validate_ident(class, part)?;
            classes.push(class.to_string());
        }

        if tag.is_none() && classes.is_empty() && head != "*" {
            return Err(Error::Selector(format!("empty compound `{part}`")));
        }

        Ok(Self { tag, classes })
    }

    fn matches(&self, document: &Document, id: NodeId) -> bool {
        let Some(element) = document.element(id) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if !element.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

fn validate_ident(ident: &str, part: &str) -> Result<()> {
    if ident
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(Error::Selector(format!(
            "unsupported character in `{part}`"
        )))
    }
}

/// A parsed descendant-combinator selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parses a selector such as `.toast .msg` or `div.row button.delete`.
    pub fn parse(source: &str) -> Result<Self> {
        let compounds = source
            .split_whitespace()
            .map(Compound::parse)
            .collect::<Result<Vec<_>>>()?;

        if compounds.is_empty() {
            return Err(Error::Selector("empty pattern".to_string()));
        }

        Ok(Self {
            source: compounds_source(source),
            compounds,
        })
    }

    /// Returns the normalized source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns whether the element `id` matches this selector.
    ///
    /// The rightmost compound must match the element itself; every other
    /// compound must match some ancestor, in order. Greedy matching is
    /// sufficient because only the descendant combinator is supported.
    #[must_use]
    pub fn matches(&self, document: &Document, id: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(document, id) {
            return false;
        }

        let mut remaining = ancestors.iter().rev().peekable();
        let mut cursor = document.parent(id);
        while let Some(compound) = remaining.peek() {
            let Some(ancestor) = cursor else {
                return false;
            };
            if compound.matches(document, ancestor) {
                remaining.next();
            }
            cursor = document.parent(ancestor);
        }
        true
    }
}

fn compounds_source(source: &str) -> String {
    source.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
