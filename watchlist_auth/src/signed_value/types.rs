use std::fmt;

pub(super) const VALUE_SEPARATOR: char = '|';

/// A payload and the keyed signature computed over it.
///
/// Wire form is `payload|signature`. Parsing splits on the last separator,
/// so a payload may itself contain `|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedValue {
    pub payload: String,
    pub signature: String,
}

impl SignedValue {
    /// Split `payload|signature`. Returns `None` when the separator is missing.
    pub fn parse(s: &str) -> Option<Self> {
        let (payload, signature) = s.rsplit_once(VALUE_SEPARATOR)?;
        Some(Self {
            payload: payload.to_string(),
            signature: signature.to_string(),
        })
    }
}

impl fmt::Display for SignedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.payload, VALUE_SEPARATOR, self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_last_separator() {
        let value = SignedValue::parse("a|b|sig").expect("has separator");
        assert_eq!(value.payload, "a|b");
        assert_eq!(value.signature, "sig");
    }

    #[test]
    fn test_parse_without_separator() {
        assert_eq!(SignedValue::parse("no-separator"), None);
        assert_eq!(SignedValue::parse(""), None);
    }

    #[test]
    fn test_parse_empty_parts() {
        let value = SignedValue::parse("|").expect("has separator");
        assert_eq!(value.payload, "");
        assert_eq!(value.signature, "");
    }

    #[test]
    fn test_display() {
        let value = SignedValue {
            payload: "42".to_string(),
            signature: "abc".to_string(),
        };
        assert_eq!(value.to_string(), "42|abc");
    }
}
