use regex::Regex;
use std::sync::LazyLock;

// Grammar of the size suffix written by the rename workflows. Changing it
// breaks idempotence for directories tagged by earlier versions.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+\[\d+(\.\d+)?\s+(B|K[Bb]|M[Bb]|G[Bb]|T[Bb]|P[Bb]|E[Bb]|Z[Bb]|Y[Bb])\]$")
        .unwrap()
});

/// Whether `name` already ends with a size tag such as `" [1.5 MB]"`.
pub fn is_already_tagged(name: &str) -> bool {
    TAG_PATTERN.is_match(name)
}
