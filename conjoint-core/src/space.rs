//! The attribute space: fixed level domains and true part-worth utilities.
//!
//! Utilities are process-wide constants fixed at compile time. Every other
//! component reads from here; lookup only, no side effects. The part-worth
//! model is additive: a profile's utility is the sum of one part-worth per
//! attribute, with no interaction terms.

use crate::constants::{
    IMPORTANCE_ADS, IMPORTANCE_PRICE, IMPORTANCE_QUALITY, IMPORTANCE_SCREENS,
};
use crate::errors::SpaceError;
use crate::types::{AdTier, Attribute, Level, ProductProfile, VideoQuality};

/// Monthly price tiers and their part-worths, in domain order.
const PRICE_PARTWORTHS: [(f64, f64); 4] = [
    (6.99, 2.5),
    (11.99, 1.2),
    (15.49, -0.5),
    (22.99, -2.8),
];

/// Ad tiers and their part-worths, in domain order.
const AD_PARTWORTHS: [(AdTier, f64); 3] = [
    (AdTier::None, 1.5),
    (AdTier::Limited, 0.2),
    (AdTier::Standard, -1.2),
];

/// Quality levels and their part-worths, in domain order.
const QUALITY_PARTWORTHS: [(VideoQuality, f64); 3] = [
    (VideoQuality::Sd720, -1.0),
    (VideoQuality::Hd1080, 0.5),
    (VideoQuality::Uhd4kHdr, 1.8),
];

/// Screen counts and their part-worths, in domain order.
const SCREEN_PARTWORTHS: [(u8, f64); 3] = [(1, -0.5), (2, 0.3), (4, 1.2)];

/// Domain and true-utility lookup for the four product attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeSpace;

impl AttributeSpace {
    pub fn new() -> Self {
        Self
    }

    /// The ordered level domain of `attribute`.
    pub fn levels(&self, attribute: Attribute) -> Vec<Level> {
        match attribute {
            Attribute::Price => PRICE_PARTWORTHS
                .iter()
                .map(|&(price, _)| Level::Price(price))
                .collect(),
            Attribute::Ads => AD_PARTWORTHS
                .iter()
                .map(|&(tier, _)| Level::Ads(tier))
                .collect(),
            Attribute::Quality => QUALITY_PARTWORTHS
                .iter()
                .map(|&(quality, _)| Level::Quality(quality))
                .collect(),
            Attribute::Screens => SCREEN_PARTWORTHS
                .iter()
                .map(|&(screens, _)| Level::Screens(screens))
                .collect(),
        }
    }

    /// True part-worth utility of `level` within `attribute`.
    ///
    /// Fails with `UnknownLevel` if the level is outside the attribute's
    /// domain, or belongs to a different attribute.
    pub fn utility(&self, attribute: Attribute, level: Level) -> Result<f64, SpaceError> {
        let found = match (attribute, level) {
            (Attribute::Price, Level::Price(price)) => PRICE_PARTWORTHS
                .iter()
                .find(|&&(tier, _)| tier == price)
                .map(|&(_, utility)| utility),
            (Attribute::Ads, Level::Ads(tier)) => AD_PARTWORTHS
                .iter()
                .find(|&&(candidate, _)| candidate == tier)
                .map(|&(_, utility)| utility),
            (Attribute::Quality, Level::Quality(quality)) => QUALITY_PARTWORTHS
                .iter()
                .find(|&&(candidate, _)| candidate == quality)
                .map(|&(_, utility)| utility),
            (Attribute::Screens, Level::Screens(screens)) => SCREEN_PARTWORTHS
                .iter()
                .find(|&&(count, _)| count == screens)
                .map(|&(_, utility)| utility),
            _ => None,
        };
        found.ok_or_else(|| SpaceError::UnknownLevel {
            attribute,
            value: level.label(),
        })
    }

    /// Aggregate utility of a fully-specified profile: the sum of its four
    /// part-worths.
    pub fn profile_utility(&self, profile: &ProductProfile) -> Result<f64, SpaceError> {
        let mut total = 0.0;
        for attribute in Attribute::ALL {
            total += self.utility(*attribute, profile.level(*attribute))?;
        }
        Ok(total)
    }

    /// Price tiers paired with their part-worths, for samplers.
    pub fn price_partworths(&self) -> &'static [(f64, f64)] {
        &PRICE_PARTWORTHS
    }

    /// Ad tiers paired with their part-worths, for samplers.
    pub fn ad_partworths(&self) -> &'static [(AdTier, f64)] {
        &AD_PARTWORTHS
    }

    /// Quality levels paired with their part-worths, for samplers.
    pub fn quality_partworths(&self) -> &'static [(VideoQuality, f64)] {
        &QUALITY_PARTWORTHS
    }

    /// Screen counts paired with their part-worths, for samplers.
    pub fn screen_partworths(&self) -> &'static [(u8, f64)] {
        &SCREEN_PARTWORTHS
    }

    /// Part-worth series for one attribute, as (label, utility) pairs in
    /// domain order. Chart-ready data for the utility panels.
    pub fn utility_series(&self, attribute: Attribute) -> Vec<(String, f64)> {
        match attribute {
            Attribute::Price => PRICE_PARTWORTHS
                .iter()
                .map(|&(price, utility)| (Level::Price(price).label(), utility))
                .collect(),
            Attribute::Ads => AD_PARTWORTHS
                .iter()
                .map(|&(tier, utility)| (tier.label().to_string(), utility))
                .collect(),
            Attribute::Quality => QUALITY_PARTWORTHS
                .iter()
                .map(|&(quality, utility)| (quality.label().to_string(), utility))
                .collect(),
            Attribute::Screens => SCREEN_PARTWORTHS
                .iter()
                .map(|&(screens, utility)| (screens.to_string(), utility))
                .collect(),
        }
    }

    /// Fixed attribute-importance weights (percent), for the overview panel.
    pub fn importance(&self) -> Vec<(Attribute, u32)> {
        vec![
            (Attribute::Price, IMPORTANCE_PRICE),
            (Attribute::Ads, IMPORTANCE_ADS),
            (Attribute::Quality, IMPORTANCE_QUALITY),
            (Attribute::Screens, IMPORTANCE_SCREENS),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_sizes() {
        let space = AttributeSpace::new();
        assert_eq!(space.levels(Attribute::Price).len(), 4);
        assert_eq!(space.levels(Attribute::Ads).len(), 3);
        assert_eq!(space.levels(Attribute::Quality).len(), 3);
        assert_eq!(space.levels(Attribute::Screens).len(), 3);
    }

    #[test]
    fn test_utility_lookup_matches_table() {
        let space = AttributeSpace::new();
        assert_eq!(space.utility(Attribute::Price, Level::Price(6.99)).unwrap(), 2.5);
        assert_eq!(space.utility(Attribute::Ads, Level::Ads(AdTier::Standard)).unwrap(), -1.2);
        assert_eq!(
            space.utility(Attribute::Quality, Level::Quality(VideoQuality::Uhd4kHdr)).unwrap(),
            1.8
        );
        assert_eq!(space.utility(Attribute::Screens, Level::Screens(4)).unwrap(), 1.2);
    }

    #[test]
    fn test_out_of_domain_price_rejected() {
        let space = AttributeSpace::new();
        let err = space.utility(Attribute::Price, Level::Price(9.99)).unwrap_err();
        assert!(matches!(
            err,
            SpaceError::UnknownLevel { attribute: Attribute::Price, .. }
        ));
    }

    #[test]
    fn test_level_from_wrong_attribute_rejected() {
        let space = AttributeSpace::new();
        let err = space
            .utility(Attribute::Price, Level::Ads(AdTier::None))
            .unwrap_err();
        assert!(matches!(err, SpaceError::UnknownLevel { .. }));
    }

    #[test]
    fn test_profile_utility_is_additive() {
        let space = AttributeSpace::new();
        let profile = ProductProfile::new(11.99, AdTier::None, VideoQuality::Sd720, 1);
        // 1.2 + 1.5 - 1.0 - 0.5
        let utility = space.profile_utility(&profile).unwrap();
        assert!((utility - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_utility_series_aligned_with_levels() {
        let space = AttributeSpace::new();
        for attribute in Attribute::ALL {
            let series = space.utility_series(*attribute);
            let levels = space.levels(*attribute);
            assert_eq!(series.len(), levels.len());
            for (point, level) in series.iter().zip(&levels) {
                assert_eq!(point.0, level.label());
            }
        }
    }

    #[test]
    fn test_importance_weights_total_100() {
        let space = AttributeSpace::new();
        let total: u32 = space.importance().iter().map(|(_, weight)| weight).sum();
        assert_eq!(total, 100);
    }
}
