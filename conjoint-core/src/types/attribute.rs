//! The closed set of product attributes under study.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SpaceError;

/// One of the four product attributes varied across choice tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Price,
    Ads,
    Quality,
    Screens,
}

impl Attribute {
    /// All four attributes, in canonical order.
    pub const ALL: &'static [Attribute] =
        &[Self::Price, Self::Ads, Self::Quality, Self::Screens];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Ads => "ads",
            Self::Quality => "quality",
            Self::Screens => "screens",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = SpaceError;

    /// Parse an attribute name arriving from the untyped host boundary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "ads" => Ok(Self::Ads),
            "quality" => Ok(Self::Quality),
            "screens" => Ok(Self::Screens),
            other => Err(SpaceError::UnknownAttribute {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ATTRIBUTE_COUNT;

    #[test]
    fn test_all_contains_four_attributes() {
        assert_eq!(Attribute::ALL.len(), ATTRIBUTE_COUNT);
    }

    #[test]
    fn test_round_trip_names() {
        for attribute in Attribute::ALL {
            let parsed: Attribute = attribute.name().parse().unwrap();
            assert_eq!(parsed, *attribute);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "color".parse::<Attribute>().unwrap_err();
        assert!(matches!(err, SpaceError::UnknownAttribute { name } if name == "color"));
    }
}
