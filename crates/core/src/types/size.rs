//! Garment size codes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Garment sizes offered across the catalog.
///
/// Cart identity is the `(product, size)` pair, so the same product in two
/// sizes occupies two cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    /// The size preselected on the product page.
    #[default]
    M,
    L,
    Xl,
    Xxl,
}

impl Size {
    /// All sizes in selector display order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl, Self::Xxl];

    /// The size code as shown on the size selector.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            "XXL" => Ok(Self::Xxl),
            _ => Err(SizeParseError(s.to_owned())),
        }
    }
}

/// Error parsing a size code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized size code: {0}")]
pub struct SizeParseError(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_m() {
        assert_eq!(Size::default(), Size::M);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("xl".parse::<Size>().unwrap(), Size::Xl);
        assert_eq!("XXL".parse::<Size>().unwrap(), Size::Xxl);
        assert_eq!("m".parse::<Size>().unwrap(), Size::M);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!("XXXL".parse::<Size>(), Err(SizeParseError(_))));
    }

    #[test]
    fn test_display_matches_code() {
        for size in Size::ALL {
            assert_eq!(size.to_string(), size.code());
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Size::Xxl).unwrap();
        assert_eq!(json, "\"XXL\"");
        let parsed: Size = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(parsed, Size::Xs);
    }
}
