use std::str::FromStr;

use crate::FormatError;

pub(crate) const PRE_RELEASE: &str = "pre-release";
pub(crate) const BUILD: &str = "build metadata";

/// One dot-separated token of a pre-release segment.
///
/// The variant order is significant: the derived `Ord` ranks every numeric
/// identifier below every alphanumeric one, compares numbers numerically and
/// strings bytewise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn is_alphanumeric(&self) -> bool {
        matches!(self, Self::AlphaNumeric(_))
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::AlphaNumeric(_) => None,
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for Identifier {
    type Err = FormatError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        check_token(PRE_RELEASE, token)?;

        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Self::AlphaNumeric(token.to_owned()));
        }
        if token.len() > 1 && token.starts_with('0') {
            return Err(FormatError::LeadingZeroIdentifier {
                identifier: token.to_owned(),
            });
        }
        token
            .parse::<u64>()
            .map(Self::Numeric)
            .map_err(|_| FormatError::IdentifierOverflow {
                identifier: token.to_owned(),
            })
    }
}

/// Validate one build metadata token. Leading zeros are fine here.
pub(crate) fn parse_build(token: &str) -> Result<String, FormatError> {
    check_token(BUILD, token)?;
    Ok(token.to_owned())
}

/// Split a segment on `.` and parse every token, failing on the first bad one.
pub(crate) fn split_segment<T>(
    segment: &str,
    parse: impl Fn(&str) -> Result<T, FormatError>,
) -> Result<Vec<T>, FormatError> {
    segment.split('.').map(parse).collect()
}

fn check_token(segment: &'static str, token: &str) -> Result<(), FormatError> {
    if token.is_empty() {
        return Err(FormatError::EmptyIdentifier { segment });
    }
    if !token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
        return Err(FormatError::InvalidIdentifier {
            segment,
            identifier: token.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn id(token: &str) -> Identifier {
        token.parse().unwrap()
    }

    #[test]
    fn test_classification() {
        assert_eq!(id("0"), Identifier::Numeric(0));
        assert_eq!(id("42"), Identifier::Numeric(42));
        assert_eq!(id("alpha"), Identifier::AlphaNumeric("alpha".to_string()));
        assert_eq!(id("0a"), Identifier::AlphaNumeric("0a".to_string()));
        assert_eq!(id("-1"), Identifier::AlphaNumeric("-1".to_string()));
        assert_eq!(id("01-"), Identifier::AlphaNumeric("01-".to_string()));
        assert!(id("7").is_numeric());
        assert!(id("rc1").is_alphanumeric());
        assert_eq!(id("7").as_number(), Some(7));
        assert_eq!(id("rc1").as_number(), None);
    }

    #[test]
    fn test_rejected_identifiers() {
        assert_eq!(
            "".parse::<Identifier>(),
            Err(FormatError::EmptyIdentifier {
                segment: PRE_RELEASE
            })
        );
        assert_eq!(
            "01".parse::<Identifier>(),
            Err(FormatError::LeadingZeroIdentifier {
                identifier: "01".to_string()
            })
        );
        assert_eq!(
            "al_pha".parse::<Identifier>(),
            Err(FormatError::InvalidIdentifier {
                segment: PRE_RELEASE,
                identifier: "al_pha".to_string()
            })
        );
        assert_eq!(
            "18446744073709551616".parse::<Identifier>(),
            Err(FormatError::IdentifierOverflow {
                identifier: "18446744073709551616".to_string()
            })
        );
        assert_eq!(
            "18446744073709551615".parse::<Identifier>(),
            Ok(Identifier::Numeric(u64::MAX))
        );
    }

    #[test]
    fn test_build_tokens_keep_leading_zeros() {
        assert_eq!(parse_build("001"), Ok("001".to_string()));
        assert_eq!(
            parse_build("x+y"),
            Err(FormatError::InvalidIdentifier {
                segment: BUILD,
                identifier: "x+y".to_string()
            })
        );
    }

    #[test]
    fn test_ord() {
        assert!(id("1") < id("2"));
        assert!(id("2") < id("11"));
        assert!(id("999") < id("alpha"));
        assert!(id("Beta") < id("alpha"));
        assert!(id("alpha") < id("beta"));
        assert!(id("beta11") < id("beta2"));
    }

    #[test]
    fn test_split_segment() {
        assert_eq!(
            split_segment("alpha.1", Identifier::from_str),
            Ok(vec![id("alpha"), id("1")])
        );
        assert_eq!(
            split_segment("alpha..1", Identifier::from_str),
            Err(FormatError::EmptyIdentifier {
                segment: PRE_RELEASE
            })
        );
    }
}
