#![no_main]

use libfuzzer_sys::fuzz_target;
use semantic_version::SemanticVersion;

fuzz_target!(|data: &str| {
    if let Ok(version) = SemanticVersion::parse(data) {
        assert_eq!(version.to_string(), data);
    }
});
