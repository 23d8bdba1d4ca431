//! Spin outcome and its presentation
//!
//! Roasts are keyed by `"{tier}_{event}"`, `"{tier}_general"`, or `"general"`.
//! Lookups walk that chain from most to least specific.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::segment::{Segment, SpinEvent};
use crate::consts::TOAST_MS;
use crate::error::{ConfigurationError, WheelError};
use crate::sinks::Stage;

/// Category every lookup eventually falls back to
pub const GENERAL: &str = "general";

/// Result of one completed spin
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub decoy: Segment,
    pub event: Option<SpinEvent>,
    /// Always the good-luck segment
    pub terminal: Segment,
}

/// What the presenter put on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub near_label: String,
    pub final_label: String,
    pub category: String,
    pub roast: String,
    pub toast: String,
}

/// Most specific roast category for a decoy/event pair
pub fn roast_category(decoy: &Segment, event: Option<&SpinEvent>) -> String {
    if !decoy.tier.is_decoy_worthy() {
        return GENERAL.to_string();
    }
    match event {
        Some(event) => format!("{}_{}", decoy.tier.as_str(), event.key.as_str()),
        None => format!("{}_general", decoy.tier.as_str()),
    }
}

/// Category name to roast lines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoastTable {
    categories: HashMap<String, Vec<String>>,
}

impl RoastTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, lines: Vec<String>) {
        self.categories.insert(category.into(), lines);
    }

    fn lines(&self, category: &str) -> Option<&[String]> {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .filter(|lines| !lines.is_empty())
    }

    pub fn general(&self) -> &[String] {
        self.lines(GENERAL).unwrap_or(&[])
    }

    /// First category in the fallback chain that has lines
    pub fn resolve_category(&self, decoy: &Segment, event: Option<&SpinEvent>) -> String {
        let specific = roast_category(decoy, event);
        if self.lines(&specific).is_some() {
            return specific;
        }
        if decoy.tier.is_decoy_worthy() {
            let tier_general = format!("{}_general", decoy.tier.as_str());
            if self.lines(&tier_general).is_some() {
                return tier_general;
            }
        }
        GENERAL.to_string()
    }

    /// Random line from `category`, or from `general` if the category is absent
    pub fn pick_roast<R: Rng>(&self, category: &str, rng: &mut R) -> Option<&str> {
        self.lines(category)
            .unwrap_or_else(|| self.general())
            .choose(rng)
            .map(String::as_str)
    }
}

/// Roasts plus post-spin toast messages, as shipped in the banter JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banter {
    pub toasts: Vec<String>,
    pub roasts: RoastTable,
}

impl Banter {
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let banter: Self = serde_json::from_str(json)?;
        banter.validate()?;
        Ok(banter)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.roasts.general().is_empty() {
            return Err(ConfigurationError::MissingGeneralRoasts);
        }
        if self.toasts.is_empty() {
            return Err(ConfigurationError::NoToasts);
        }
        Ok(())
    }
}

/// Turns an outcome into result text, toast, and confetti
#[derive(Debug, Clone)]
pub struct OutcomePresenter {
    banter: Banter,
    final_label: String,
}

impl OutcomePresenter {
    pub fn new(banter: Banter, final_label: impl Into<String>) -> Result<Self, ConfigurationError> {
        banter.validate()?;
        Ok(Self {
            banter,
            final_label: final_label.into(),
        })
    }

    pub fn roasts(&self) -> &RoastTable {
        &self.banter.roasts
    }

    /// Choose the texts for `outcome` without touching any sink
    pub fn compose<R: Rng>(&self, outcome: &SpinOutcome, rng: &mut R) -> Presentation {
        let roasts = &self.banter.roasts;
        let category = roasts.resolve_category(&outcome.decoy, outcome.event.as_ref());
        let roast = roasts.pick_roast(&category, rng).unwrap_or_default().to_string();
        let toast = self
            .banter
            .toasts
            .choose(rng)
            .cloned()
            .unwrap_or_default();

        Presentation {
            near_label: outcome.decoy.label.clone(),
            final_label: self.final_label.clone(),
            category,
            roast,
            toast,
        }
    }

    /// Show the result and re-enable spinning
    pub fn present<S: Stage, R: Rng>(
        &self,
        outcome: &SpinOutcome,
        stage: &mut S,
        rng: &mut R,
    ) -> Presentation {
        let presentation = self.compose(outcome, rng);
        log::info!(
            "Spin finished: almost {} ({}), got {}",
            presentation.near_label,
            presentation.category,
            presentation.final_label
        );

        stage.show_result(&presentation);
        stage.fire_confetti();
        stage.show_toast(&presentation.toast, TOAST_MS);
        stage.set_spin_enabled(true);
        presentation
    }
}
