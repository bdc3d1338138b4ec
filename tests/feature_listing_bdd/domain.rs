//! Domain wrapper types for the feature listing BDD tests.

use std::fmt;
use std::str::FromStr;

/// Count of features on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeatureCount(u32);

impl FeatureCount {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for FeatureCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl fmt::Display for FeatureCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page number for pagination (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageNumber(u32);

impl PageNumber {
    pub(crate) const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u32>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageNumber must be >= 1".to_owned());
        }
        Ok(Self(value))
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw HTTP status configured for the delete endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusValue(u16);

impl StatusValue {
    pub(crate) const fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for StatusValue {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u16>().map(Self)
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
