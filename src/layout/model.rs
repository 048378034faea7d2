use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::{
        core::{Rect, ensure_finite, ensure_finite_rect},
        error::{LandkitError, LandkitResult},
    },
    interact::reveal::RevealTarget,
    scroll::progress::PinnedRegion,
};

/// Geometry measured by the host page after layout, in document coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub sections: BTreeMap<String, f64>, // section id -> top offset
    pub pinned: PinnedRegion,
    #[serde(default)]
    pub reveal: Vec<RevealTarget>,
    #[serde(default)]
    pub counters: Vec<CounterTarget>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CounterTarget {
    pub id: String,
    pub rect: Rect,
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
}

impl PageLayout {
    pub fn from_json(s: &str) -> LandkitResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn validate(&self) -> LandkitResult<()> {
        self.pinned
            .validate()
            .map_err(|e| LandkitError::layout(e.to_string()))?;

        for (id, top) in &self.sections {
            ensure_finite(&format!("section '{id}' top"), *top)
                .map_err(|e| LandkitError::layout(e.to_string()))?;
        }

        let mut seen = BTreeSet::new();
        for t in &self.reveal {
            t.validate()
                .map_err(|e| LandkitError::layout(e.to_string()))?;
            if !seen.insert(t.id.as_str()) {
                return Err(LandkitError::layout(format!(
                    "duplicate reveal target id '{}'",
                    t.id
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for c in &self.counters {
            if c.id.trim().is_empty() {
                return Err(LandkitError::layout("counter id must be non-empty"));
            }
            ensure_finite_rect(&format!("counter '{}'", c.id), c.rect)
                .map_err(|e| LandkitError::layout(e.to_string()))?;
            if !seen.insert(c.id.as_str()) {
                return Err(LandkitError::layout(format!(
                    "duplicate counter id '{}'",
                    c.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
