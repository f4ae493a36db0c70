//! Attribute levels as presented to respondents.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Ad experience tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdTier {
    None,
    Limited,
    Standard,
}

impl AdTier {
    /// All tiers, in domain order.
    pub const ALL: &'static [AdTier] = &[Self::None, Self::Limited, Self::Standard];

    /// Label as shown to respondents and on dashboard axes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Limited => "Limited",
            Self::Standard => "Standard",
        }
    }
}

impl fmt::Display for AdTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Peak streaming quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "720p")]
    Sd720,
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "4K+HDR")]
    Uhd4kHdr,
}

impl VideoQuality {
    /// All quality levels, in domain order.
    pub const ALL: &'static [VideoQuality] = &[Self::Sd720, Self::Hd1080, Self::Uhd4kHdr];

    /// Label as shown to respondents and on dashboard axes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sd720 => "720p",
            Self::Hd1080 => "1080p",
            Self::Uhd4kHdr => "4K+HDR",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One concrete level of one attribute.
///
/// Serialized untagged so level values match the shape the front end edits:
/// tiers and qualities as their labels, prices and screen counts as numbers.
/// Variant order matters for deserialization: `Screens` is tried before
/// `Price` so integer values resolve to screen counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Ads(AdTier),
    Quality(VideoQuality),
    Screens(u8),
    Price(f64),
}

impl Level {
    /// The attribute this level belongs to.
    pub fn attribute(&self) -> Attribute {
        match self {
            Self::Price(_) => Attribute::Price,
            Self::Ads(_) => Attribute::Ads,
            Self::Quality(_) => Attribute::Quality,
            Self::Screens(_) => Attribute::Screens,
        }
    }

    /// Display label for chart axes.
    pub fn label(&self) -> String {
        match self {
            Self::Price(price) => format!("{price:.2}"),
            Self::Ads(tier) => tier.label().to_string(),
            Self::Quality(quality) => quality.label().to_string(),
            Self::Screens(screens) => screens.to_string(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
