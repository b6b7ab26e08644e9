use std::{cmp::Ordering, hash::Hash, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};
use tracing::trace;

use crate::{
    FormatError,
    identifier::{self, Identifier},
};

/// A Semantic Versioning 2.0.0 version: `MAJOR.MINOR.PATCH[-PRE][+BUILD]`.
///
/// Values are immutable once built. Build metadata is kept for display but
/// takes no part in equality, ordering or hashing, so `1.0.0+x64` and
/// `1.0.0+x86` are the same version.
#[derive(Debug, Clone, DeserializeFromStr, SerializeDisplay)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<Identifier>,
    build: Vec<String>,
}

impl SemanticVersion {
    /// A release version with no pre-release or build metadata.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Build a version from its parts, validating every identifier with the
    /// same rules as [`SemanticVersion::parse`].
    pub fn from_parts<P, B>(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: P,
        build: B,
    ) -> Result<Self, FormatError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let pre_release = pre_release
            .into_iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Identifier>, _>>()?;
        let build = build
            .into_iter()
            .map(|token| identifier::parse_build(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    /// Parse a version string. No surrounding whitespace and no `v` prefix.
    pub fn parse(version: &str) -> Result<Self, FormatError> {
        Self::parse_strict(version)
            .inspect_err(|error| trace!(version, %error, "Rejected version string"))
    }

    fn parse_strict(version: &str) -> Result<Self, FormatError> {
        if version.is_empty() {
            return Err(FormatError::Empty);
        }

        if let Some((position, character)) = version
            .char_indices()
            .find(|&(_, c)| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+')))
        {
            return Err(FormatError::UnexpectedCharacter {
                version: version.to_owned(),
                character,
                position,
            });
        }

        // The core is digits and dots only, so the first `+` starts the build
        // metadata and the first `-` before it starts the pre-release.
        let (rest, build) = match version.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (version, None),
        };
        let (core, pre_release) = match rest.split_once('-') {
            Some((core, pre_release)) => (core, Some(pre_release)),
            None => (rest, None),
        };

        let mut parts = core.split('.');
        let major = Self::parse_part(parts.next(), "major", version)?;
        let minor = Self::parse_part(parts.next(), "minor", version)?;
        let patch = Self::parse_part(parts.next(), "patch", version)?;
        if parts.next().is_some() {
            return Err(FormatError::TooManyParts {
                version: version.to_owned(),
            });
        }

        let pre_release = pre_release
            .map(|segment| identifier::split_segment(segment, Identifier::from_str))
            .transpose()?
            .unwrap_or_default();
        let build = build
            .map(|segment| identifier::split_segment(segment, identifier::parse_build))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        })
    }

    fn parse_part(
        field: Option<&str>,
        part: &'static str,
        version: &str,
    ) -> Result<u64, FormatError> {
        match field {
            None | Some("") => Err(FormatError::MissingPart {
                part,
                version: version.to_owned(),
            }),
            Some(value) if !value.bytes().all(|b| b.is_ascii_digit()) => {
                Err(FormatError::InvalidPart {
                    part,
                    value: value.to_owned(),
                    version: version.to_owned(),
                })
            }
            Some(value) if value.len() > 1 && value.starts_with('0') => {
                Err(FormatError::LeadingZero {
                    part,
                    value: value.to_owned(),
                    version: version.to_owned(),
                })
            }
            Some(value) => value.parse::<u64>().map_err(|_| FormatError::Overflow {
                part,
                value: value.to_owned(),
                version: version.to_owned(),
            }),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The release this version leads up to, e.g. `1.2.0` for `1.2.0-rc.1+abc`.
    pub fn release(&self) -> Self {
        Self::new(self.major, self.minor, self.patch)
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.major != other.major {
            self.major.cmp(&other.major)
        } else if self.minor != other.minor {
            self.minor.cmp(&other.minor)
        } else if self.patch != other.patch {
            self.patch.cmp(&other.patch)
        } else {
            match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                // Identifier by identifier; a strict prefix sorts first.
                (true, true) => self.pre_release.cmp(&other.pre_release),
            }
        }
    }
}

impl std::fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, identifier) in self.pre_release.iter().enumerate() {
            let separator = if i == 0 { '-' } else { '.' };
            write!(f, "{separator}{identifier}")?;
        }
        for (i, token) in self.build.iter().enumerate() {
            let separator = if i == 0 { '+' } else { '.' };
            write!(f, "{separator}{token}")?;
        }

        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
