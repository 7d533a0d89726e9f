//! npm-style package name validation

use regex::Regex;
use std::sync::LazyLock;

/// Optional `@scope/` prefix followed by the bare name. Lowercase only.
static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-][a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});

/// Check whether `candidate` is usable as a package name
pub fn is_valid_name(candidate: &str) -> bool {
    PACKAGE_NAME.is_match(candidate)
}
