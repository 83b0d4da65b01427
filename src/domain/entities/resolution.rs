//! Tri-state outcome of a mapping lookup.

use super::Mapping;

/// Outcome of resolving a mapping within one request.
///
/// `NotAttempted` is the state of a request nobody has resolved yet. The
/// resolver itself only ever produces `Found` or `Absent`. Dependency failures
/// are reported as `Absent`, so "no mapping" and "storage unreachable" are
/// indistinguishable here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    NotAttempted,
    Found(Mapping),
    Absent,
}

impl Resolution {
    /// Returns true once a lookup has produced `Found` or `Absent`.
    pub fn is_attempted(&self) -> bool {
        !matches!(self, Self::NotAttempted)
    }

    /// Returns the mapping if one was found.
    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Found(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Self::Found(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl From<Option<Mapping>> for Resolution {
    fn from(value: Option<Mapping>) -> Self {
        match value {
            Some(mapping) => Self::Found(mapping),
            None => Self::Absent,
        }
    }
}
