//! Shared proptest generators.

use proptest::prelude::*;

/// Timestamp-like version labels (`YYYYMMDD` or `YYYYMMDDhhmmss`).
pub fn timestamp_version_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (2015u32..2035, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{y}{m:02}{d:02}")),
        (2015u32..2035, 1u32..13, 1u32..29, 0u32..24, 0u32..60, 0u32..60)
            .prop_map(|(y, m, d, h, min, s)| format!("{y}{m:02}{d:02}{h:02}{min:02}{s:02}")),
    ]
}

/// Arbitrary version labels, including ones that do not sort numerically.
pub fn version_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        timestamp_version_strategy(),
        (0u32..200).prop_map(|n| format!("v{n}")),
        "[A-Za-z0-9_.-]{1,24}",
    ]
}

/// Non-empty sets of version labels.
pub fn version_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(version_id_strategy(), 1..20)
}

/// Service account usernames.
pub fn username_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{3,15}"
}

/// Passwords with symbols.
pub fn password_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9!@#$%^&*]{8,64}"
}

/// Vault client tokens.
pub fn token_strategy() -> impl Strategy<Value = String> {
    "hvs\\.[A-Za-z0-9]{24}"
}
