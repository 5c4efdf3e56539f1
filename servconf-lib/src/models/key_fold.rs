/// Transformation applied to entry keys on insertion and lookup.
///
/// `Preserve` keeps keys byte-for-byte, so comparisons are case-sensitive.
/// `AsciiLowercase` folds keys the way most INI parsers do by default.
/// Section names are never folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyFold {
    #[default]
    Preserve,
    AsciiLowercase,
}

impl KeyFold {
    pub fn apply(self, key: String) -> String {
        match self {
            KeyFold::Preserve => key,
            KeyFold::AsciiLowercase => {
                let mut folded = key;
                folded.make_ascii_lowercase();
                folded
            }
        }
    }

    /// Compares an already-folded stored key against an unfolded lookup key.
    pub fn matches(self, stored: &str, lookup: &str) -> bool {
        match self {
            KeyFold::Preserve => stored == lookup,
            KeyFold::AsciiLowercase => stored.eq_ignore_ascii_case(lookup),
        }
    }
}
