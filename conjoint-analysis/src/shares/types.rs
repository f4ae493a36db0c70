//! Scenario and share types.

use serde::{Deserialize, Serialize};

use conjoint_core::errors::EstimateError;
use conjoint_core::types::{AdTier, Attribute, ProductProfile, VideoQuality};

/// A user-editable candidate configuration for market simulation.
///
/// Fields other than `name` are optional while the scenario is being edited;
/// estimation requires all four attributes to be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Stable identifier for the editing collaborator.
    pub id: u32,
    /// Display name, mandatory.
    pub name: String,
    /// Monthly price in dollars.
    pub price: Option<f64>,
    /// Ad experience tier.
    pub ads: Option<AdTier>,
    /// Peak streaming quality.
    pub quality: Option<VideoQuality>,
    /// Simultaneous screen count.
    pub screens: Option<u8>,
}

impl Scenario {
    /// Create a fully-specified scenario.
    pub fn new(id: u32, name: impl Into<String>, profile: ProductProfile) -> Self {
        Self {
            id,
            name: name.into(),
            price: Some(profile.price),
            ads: Some(profile.ads),
            quality: Some(profile.quality),
            screens: Some(profile.screens),
        }
    }

    /// The two seed scenarios every session starts from.
    pub fn default_pair() -> Vec<Scenario> {
        vec![
            Scenario::new(
                1,
                "Current Basic",
                ProductProfile::new(11.99, AdTier::None, VideoQuality::Sd720, 1),
            ),
            Scenario::new(
                2,
                "New Concept",
                ProductProfile::new(15.49, AdTier::Limited, VideoQuality::Uhd4kHdr, 4),
            ),
        ]
    }

    /// Resolve the scenario into a complete profile.
    ///
    /// Fails with `IncompleteConfiguration` naming the first missing
    /// attribute, in price, ads, quality, screens order.
    pub fn profile(&self) -> Result<ProductProfile, EstimateError> {
        let missing = |attribute: Attribute| EstimateError::IncompleteConfiguration {
            scenario: self.name.clone(),
            attribute,
        };
        Ok(ProductProfile::new(
            self.price.ok_or_else(|| missing(Attribute::Price))?,
            self.ads.ok_or_else(|| missing(Attribute::Ads))?,
            self.quality.ok_or_else(|| missing(Attribute::Quality))?,
            self.screens.ok_or_else(|| missing(Attribute::Screens))?,
        ))
    }
}

/// One scenario's predicted market share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioShare {
    /// Scenario display name, mirrored from the input.
    pub name: String,
    /// Predicted share, rounded to a whole percent.
    pub percentage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_complete() {
        let scenarios = Scenario::default_pair();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "Current Basic");
        assert_eq!(scenarios[1].name, "New Concept");
        for scenario in &scenarios {
            assert!(scenario.profile().is_ok());
        }
    }

    #[test]
    fn test_first_missing_attribute_reported() {
        let mut scenario = Scenario::default_pair().remove(0);
        scenario.ads = None;
        scenario.screens = None;
        let err = scenario.profile().unwrap_err();
        assert!(matches!(
            err,
            EstimateError::IncompleteConfiguration {
                attribute: Attribute::Ads,
                ..
            }
        ));
    }
}
