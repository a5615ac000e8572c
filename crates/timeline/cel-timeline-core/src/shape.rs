#![allow(dead_code)]
//! Declared objects: geometry kind and registry entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::state::State;

/// Closed set of geometry kinds. Rendering collaborators pattern-match
/// on this tag; the core never dispatches on it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Oval,
    Cross,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Oval => "oval",
            ShapeKind::Cross => "cross",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = TimelineError;

    /// Parses a scene-description kind name. `rectangle`, `ellipse`,
    /// and `plus` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" | "rectangle" => Ok(ShapeKind::Box),
            "oval" | "ellipse" => Ok(ShapeKind::Oval),
            "cross" | "plus" => Ok(ShapeKind::Cross),
            other => Err(TimelineError::InvalidKind(other.to_string())),
        }
    }
}

/// Registry entry: identity, geometry, and the pose the first appended
/// interval starts from. Immutable once declared.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shape {
    pub name: String,
    pub kind: ShapeKind,
    pub initial: State,
}

impl Shape {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            initial: State::default(),
        }
    }

    pub fn with_initial(name: impl Into<String>, kind: ShapeKind, initial: State) -> Self {
        Self {
            name: name.into(),
            kind,
            initial,
        }
    }
}
