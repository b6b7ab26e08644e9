/// Ways a version string can fail to parse.
///
/// Parsing is all-or-nothing: the first rule an input breaks is reported and
/// nothing is salvaged from the rest of it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Empty version string")]
    Empty,
    #[error("Unexpected character {character:?} at position {position} in version {version:?}")]
    UnexpectedCharacter {
        version: String,
        character: char,
        position: usize,
    },
    #[error("Missing {part} version in {version}")]
    MissingPart { part: &'static str, version: String },
    #[error("Version {version} has more than three numbers before the pre-release")]
    TooManyParts { version: String },
    #[error("Could not parse {part} version {value:?} in {version}")]
    InvalidPart {
        part: &'static str,
        value: String,
        version: String,
    },
    #[error("The {part} version {value} in {version} cannot have leading zeros")]
    LeadingZero {
        part: &'static str,
        value: String,
        version: String,
    },
    #[error("The {part} version {value} in {version} is too large")]
    Overflow {
        part: &'static str,
        value: String,
        version: String,
    },
    #[error("Empty {segment} identifier")]
    EmptyIdentifier { segment: &'static str },
    #[error("Invalid {segment} identifier {identifier:?}")]
    InvalidIdentifier {
        segment: &'static str,
        identifier: String,
    },
    #[error("Numeric pre-release identifier {identifier} cannot have leading zeros")]
    LeadingZeroIdentifier { identifier: String },
    #[error("Numeric pre-release identifier {identifier} is too large")]
    IdentifierOverflow { identifier: String },
}
