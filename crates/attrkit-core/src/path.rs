//! # Attribute Paths
//!
//! Locates a value inside a configuration tree so that diagnostics can be
//! attributed to the exact attribute, list element, or map entry that
//! produced them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    /// A named attribute of an object or block.
    Attribute(String),
    /// A map entry.
    ElementKeyString(String),
    /// A list element.
    ElementKeyInt(i64),
}

/// Ordered path of [`PathStep`]s from the root of a configuration tree.
///
/// The empty path addresses the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrPath(Vec<PathStep>);

impl AttrPath {
    /// The empty path.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// A path addressing a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![PathStep::Attribute(name.into())])
    }

    /// Extend the path with a nested attribute name.
    #[must_use]
    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.with_step(PathStep::Attribute(name.into()))
    }

    /// Extend the path with a list element index.
    #[must_use]
    pub fn at_list_index(&self, index: i64) -> Self {
        self.with_step(PathStep::ElementKeyInt(index))
    }

    /// Extend the path with a map key.
    #[must_use]
    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::ElementKeyString(key.into()))
    }

    /// The path one step up, or `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{name}")?,
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::ElementKeyString(key) => write!(f, "[{key:?}]")?,
                PathStep::ElementKeyInt(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
