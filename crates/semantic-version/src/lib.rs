//! Semantic Versioning 2.0.0 version numbers.
//!
//! ```
//! use semantic_version::SemanticVersion;
//!
//! let rc: SemanticVersion = "1.0.0-rc.1".parse().unwrap();
//! let release = SemanticVersion::new(1, 0, 0);
//! assert!(rc < release);
//! assert_eq!(rc.release(), release);
//! ```

mod error;
mod identifier;
mod version;

pub use error::FormatError;
pub use identifier::Identifier;
pub use version::SemanticVersion;
