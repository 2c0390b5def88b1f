use std::{fmt, str::FromStr};

/// Building level a zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Level {
    #[cfg_attr(feature = "serde", serde(rename = "ground"))]
    Ground,
    #[cfg_attr(feature = "serde", serde(rename = "floor-1"))]
    Floor1,
    #[cfg_attr(feature = "serde", serde(rename = "floor-2"))]
    Floor2,
    #[cfg_attr(feature = "serde", serde(rename = "floor-3"))]
    Floor3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Ground, Level::Floor1, Level::Floor2, Level::Floor3];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Ground => "ground",
            Level::Floor1 => "floor-1",
            Level::Floor2 => "floor-2",
            Level::Floor3 => "floor-3",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Facade orientation of a zone.
///
/// Variants are declared in alphabetical order of their names; the derived
/// `Ord` is the secondary ordering used by every grouped query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Orientation {
    E,
    N,
    S,
    W,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Orientation::E, Orientation::N, Orientation::S, Orientation::W];

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::E => "E",
            Orientation::N => "N",
            Orientation::S => "S",
            Orientation::W => "W",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown orientation '{0}'")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| ParseOrientationError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_canonical_names() {
        assert_eq!("floor-2".parse::<Level>(), Ok(Level::Floor2));
        assert_eq!(" ground ".parse::<Level>(), Ok(Level::Ground));
        assert!("Floor-2".parse::<Level>().is_err());
    }

    #[test]
    fn orientation_order_is_alphabetical() {
        let mut names: Vec<&str> = Orientation::ALL.iter().map(|o| o.as_str()).collect();
        let declared = names.clone();
        names.sort();
        assert_eq!(names, declared);
        assert!(Orientation::E < Orientation::W);
    }

    #[test]
    fn orientation_rejects_unknown_value() {
        let err = "NE".parse::<Orientation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown orientation 'NE'");
    }
}
