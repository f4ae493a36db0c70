//! A fully-specified product configuration.

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::level::{AdTier, Level, VideoQuality};

/// One candidate product: exactly one level per attribute.
///
/// Construction does not check the numeric fields against the attribute
/// domains; `AttributeSpace::profile_utility` rejects out-of-domain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Monthly price in dollars.
    pub price: f64,
    /// Ad experience tier.
    pub ads: AdTier,
    /// Peak streaming quality.
    pub quality: VideoQuality,
    /// Simultaneous screen count.
    pub screens: u8,
}

impl ProductProfile {
    pub fn new(price: f64, ads: AdTier, quality: VideoQuality, screens: u8) -> Self {
        Self {
            price,
            ads,
            quality,
            screens,
        }
    }

    /// The level this profile assigns to `attribute`.
    pub fn level(&self, attribute: Attribute) -> Level {
        match attribute {
            Attribute::Price => Level::Price(self.price),
            Attribute::Ads => Level::Ads(self.ads),
            Attribute::Quality => Level::Quality(self.quality),
            Attribute::Screens => Level::Screens(self.screens),
        }
    }
}
