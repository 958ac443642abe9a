use crate::case::splitter::SplitPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Dot,
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Camel, CaseStyle::Dot, CaseStyle::Kebab];

    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Camel => "",
            CaseStyle::Dot => ".",
            CaseStyle::Kebab => "-",
        }
    }

    /// Kebab keeps its own, more lenient notion of a word boundary
    pub fn split_policy(self) -> SplitPolicy {
        match self {
            CaseStyle::Camel | CaseStyle::Dot => SplitPolicy::Delimited,
            CaseStyle::Kebab => SplitPolicy::Alphanumeric,
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "dot" | "dotcase" => Ok(CaseStyle::Dot),
            "kebab" | "kebabcase" => Ok(CaseStyle::Kebab),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Dot => write!(f, "dot"),
            CaseStyle::Kebab => write!(f, "kebab"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_names() {
        assert_eq!("camel".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("camelCase".parse::<CaseStyle>(), Ok(CaseStyle::Camel));
        assert_eq!("dot.case".parse::<CaseStyle>(), Ok(CaseStyle::Dot));
        assert_eq!("KEBAB-CASE".parse::<CaseStyle>(), Ok(CaseStyle::Kebab));
        assert!("snake".parse::<CaseStyle>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for style in CaseStyle::ALL {
            assert_eq!(style.to_string().parse::<CaseStyle>(), Ok(style));
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(CaseStyle::Camel.separator(), "");
        assert_eq!(CaseStyle::Dot.separator(), ".");
        assert_eq!(CaseStyle::Kebab.separator(), "-");
    }
}
