//! US MEC eligibility categories and their display colors.
//!
//! The summary chart assigns each condition/method pair a category from 1 to
//! 4 for both Initiation and Continuation. Anything outside that range
//! (blank cells, "NA", stray values) carries no category and renders with the
//! neutral color token.

use serde::{Deserialize, Serialize};

/// US MEC eligibility category (1 = no restriction .. 4 = unacceptable risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingCode {
    /// Category 1: no restriction for the use of the contraceptive method.
    Category1,
    /// Category 2: advantages generally outweigh theoretical or proven risks.
    Category2,
    /// Category 3: theoretical or proven risks usually outweigh the advantages.
    Category3,
    /// Category 4: unacceptable health risk if the method is used.
    Category4,
}

impl RatingCode {
    /// All categories in ascending order, for legends and iteration.
    pub const ALL: [RatingCode; 4] = [
        RatingCode::Category1,
        RatingCode::Category2,
        RatingCode::Category3,
        RatingCode::Category4,
    ];

    /// Parse a raw chart cell value. Returns `None` for anything that is not
    /// exactly `"1"`..`"4"`; malformed data is never an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::Category1),
            "2" => Some(Self::Category2),
            "3" => Some(Self::Category3),
            "4" => Some(Self::Category4),
            _ => None,
        }
    }

    /// The digit as it appears in the summary chart.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category1 => "1",
            Self::Category2 => "2",
            Self::Category3 => "3",
            Self::Category4 => "4",
        }
    }

    /// Canonical category definition from the US MEC.
    pub fn description(self) -> &'static str {
        match self {
            Self::Category1 => {
                "A condition for which there is no restriction for the use of \
                 the contraceptive method"
            }
            Self::Category2 => {
                "A condition for which the advantages of using the method \
                 generally outweigh the theoretical or proven risks"
            }
            Self::Category3 => {
                "A condition for which the theoretical or proven risks usually \
                 outweigh the advantages of using the method"
            }
            Self::Category4 => {
                "A condition that represents an unacceptable health risk if \
                 the contraceptive method is used"
            }
        }
    }

    /// Display color for this category.
    pub fn color(self) -> ColorToken {
        match self {
            Self::Category1 => ColorToken::DarkGreen,
            Self::Category2 => ColorToken::Green,
            Self::Category3 => ColorToken::Pink,
            Self::Category4 => ColorToken::Red,
        }
    }
}

/// Display color token for a rating cell.
///
/// Presentation adapters map these to whatever color type their toolkit
/// uses; `hex` carries the reference palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    DarkGreen,
    Green,
    Pink,
    Red,
    /// Grey, used for absent or unrecognized rating values.
    Neutral,
}

impl ColorToken {
    /// Map a raw rating cell to its color. Total over all inputs: unknown
    /// values and missing cells degrade to `Neutral` rather than failing.
    pub fn for_code(code: Option<&str>) -> Self {
        match code.and_then(RatingCode::parse) {
            Some(rating) => rating.color(),
            None => Self::Neutral,
        }
    }

    /// Reference palette value (RGBA hex as used by the summary chart UI).
    pub fn hex(self) -> &'static str {
        match self {
            Self::DarkGreen => "#009200FF",
            Self::Green => "#5BC515FF",
            Self::Pink => "#D96888FF",
            Self::Red => "#FF0000",
            Self::Neutral => "#757575",
        }
    }

    /// Palette value as an (r, g, b) triple for terminal rendering.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::DarkGreen => (0, 146, 0),
            Self::Green => (91, 197, 21),
            Self::Pink => (217, 104, 136),
            Self::Red => (255, 0, 0),
            Self::Neutral => (117, 117, 117),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_only_chart_digits() {
        assert_eq!(RatingCode::parse("1"), Some(RatingCode::Category1));
        assert_eq!(RatingCode::parse(" 4 "), Some(RatingCode::Category4));
        assert_eq!(RatingCode::parse(""), None);
        assert_eq!(RatingCode::parse("0"), None);
        assert_eq!(RatingCode::parse("9"), None);
        assert_eq!(RatingCode::parse("NA"), None);
    }

    #[test]
    fn color_mapping_is_total() {
        assert_eq!(ColorToken::for_code(Some("1")), ColorToken::DarkGreen);
        assert_eq!(ColorToken::for_code(Some("2")), ColorToken::Green);
        assert_eq!(ColorToken::for_code(Some("3")), ColorToken::Pink);
        assert_eq!(ColorToken::for_code(Some("4")), ColorToken::Red);
        assert_eq!(ColorToken::for_code(Some("9")), ColorToken::Neutral);
        assert_eq!(ColorToken::for_code(Some("")), ColorToken::Neutral);
        assert_eq!(ColorToken::for_code(None), ColorToken::Neutral);
    }

    #[test]
    fn descriptions_cover_all_categories() {
        for rating in RatingCode::ALL {
            assert!(!rating.description().is_empty());
        }
    }
}
