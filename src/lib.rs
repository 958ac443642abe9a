pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use case::{CaseStyle, Converter};
pub use config::Config;
pub use error::CaseError;
pub use input::{Input, ValueKind};

/// Returned by [`to_kebab_case_or_sentinel`] in place of an error.
pub const KEBAB_SENTINEL: &str = "Error: Input must be a non-null string";

/// `"first name"` -> `"firstName"`
pub fn to_camel_case(input: &str) -> error::Result<String> {
    Converter::new(CaseStyle::Camel).convert(input)
}

/// `"SCREEN_NAME"` -> `"screen.name"`
pub fn to_dot_case(input: &str) -> error::Result<String> {
    Converter::new(CaseStyle::Dot).convert(input)
}

/// `"Hello, World!"` -> `"hello-world"`
///
/// Unlike the other styles, blank or punctuation-only input converts to an
/// empty string instead of failing.
pub fn to_kebab_case(input: &str) -> error::Result<String> {
    Converter::new(CaseStyle::Kebab).convert(input)
}

/// Convert a possibly non-string value.
pub fn convert(input: &Input, style: CaseStyle) -> error::Result<String> {
    Converter::new(style).convert_input(input)
}

/// Kebab conversion that reports invalid input in-band with
/// [`KEBAB_SENTINEL`] rather than returning an error.
pub fn to_kebab_case_or_sentinel(input: &Input) -> String {
    convert(input, CaseStyle::Kebab).unwrap_or_else(|_| KEBAB_SENTINEL.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: Input,
    pub outcome: Result<String, CaseError>,
}

#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub style: CaseStyle,
    pub converted: usize,
    pub failed: usize,
    pub conversions: Vec<Conversion>,
}

impl ConversionReport {
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            converted: 0,
            failed: 0,
            conversions: Vec::new(),
        }
    }

    pub fn push(&mut self, input: Input, outcome: Result<String, CaseError>) {
        match outcome {
            Ok(_) => self.converted += 1,
            Err(_) => self.failed += 1,
        }
        self.conversions.push(Conversion { input, outcome });
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    /// Split camelCase on capital boundaries
    fn split_camel(s: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut current = String::new();

        for ch in s.chars() {
            if ch.is_uppercase() && !current.is_empty() {
                result.push(current.clone());
                current.clear();
            }
            current.extend(ch.to_lowercase());
        }

        if !current.is_empty() {
            result.push(current);
        }
        result
    }

    #[test]
    fn test_camel_examples() {
        assert_eq!(to_camel_case("first name").unwrap(), "firstName");
        assert_eq!(to_camel_case("user_id").unwrap(), "userId");
        assert_eq!(to_camel_case("SCREEN_NAME").unwrap(), "screenName");
        assert_eq!(to_camel_case("mobile-number").unwrap(), "mobileNumber");
        assert_eq!(
            to_camel_case("  multiple   spaces  here ").unwrap(),
            "multipleSpacesHere"
        );
    }

    #[test]
    fn test_dot_examples() {
        assert_eq!(to_dot_case("first name").unwrap(), "first.name");
        assert_eq!(to_dot_case("SCREEN_NAME").unwrap(), "screen.name");
        assert_eq!(to_dot_case("mobile-number").unwrap(), "mobile.number");
        assert_eq!(
            to_dot_case("  multiple   spaces  here ").unwrap(),
            "multiple.spaces.here"
        );
    }

    #[test]
    fn test_kebab_examples() {
        assert_eq!(to_kebab_case("Hello, World!").unwrap(), "hello-world");
        assert_eq!(to_kebab_case("--already--kebab--").unwrap(), "already-kebab");
        assert_eq!(to_kebab_case("SCREEN_NAME").unwrap(), "screen-name");
        assert_eq!(to_kebab_case("").unwrap(), "");
        assert_eq!(to_kebab_case("  !!  ").unwrap(), "");
    }

    #[test]
    fn test_error_paths() {
        assert_eq!(
            convert(&Input::missing(), CaseStyle::Camel),
            Err(CaseError::InvalidInput {
                received: ValueKind::Undefined
            })
        );
        assert_eq!(
            convert(&Input::from_json(&json!(null)), CaseStyle::Dot),
            Err(CaseError::InvalidInput {
                received: ValueKind::Null
            })
        );
        assert_eq!(to_camel_case("   "), Err(CaseError::EmptyInput));
        assert_eq!(to_dot_case("_-_"), Err(CaseError::EmptyInput));
    }

    #[test]
    fn test_kebab_sentinel() {
        assert_eq!(
            to_kebab_case_or_sentinel(&Input::from_json(&json!(42))),
            KEBAB_SENTINEL
        );
        assert_eq!(
            to_kebab_case_or_sentinel(&Input::from_json(&json!(42))),
            "Error: Input must be a non-null string"
        );
        assert_eq!(to_kebab_case_or_sentinel(&Input::from("My Value")), "my-value");
        assert_eq!(to_kebab_case_or_sentinel(&Input::from("")), "");
    }

    #[test]
    fn test_camel_round_trip_preserves_words() {
        let inputs = [
            "first name",
            "convert_to_camel_case",
            "make-this-camel",
            "MIXED_delimiters here-and_there",
            "  Padded   Input ",
        ];

        for input in inputs {
            let camel = to_camel_case(input).unwrap();
            let mut expected: Vec<String> = case::splitter::split(input)
                .unwrap()
                .iter()
                .map(|w| w.as_str().to_lowercase())
                .collect();
            let mut recovered = split_camel(&camel);

            expected.sort();
            recovered.sort();
            assert_eq!(recovered, expected, "round trip of {:?}", input);
        }
    }

    #[test]
    fn test_dot_case_is_idempotent() {
        for input in ["SCREEN_NAME", "first name", "  a-b_c  d ", "v2 release"] {
            let once = to_dot_case(input).unwrap();
            assert_eq!(to_dot_case(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_concurrent_conversions() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let input = format!("worker_{} output-value", i);
                    to_camel_case(&input).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), format!("worker{}OutputValue", i));
        }
    }

    #[test]
    fn test_report_counts() {
        let mut report = ConversionReport::new(CaseStyle::Dot);
        report.push(Input::from("a b"), Ok("a.b".into()));
        report.push(Input::from(" "), Err(CaseError::EmptyInput));

        assert_eq!(report.converted, 1);
        assert_eq!(report.failed, 1);
        assert!(report.has_failures());
        assert_eq!(report.conversions.len(), 2);
    }
}
