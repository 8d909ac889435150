//! Pattern classification of decoded extension sets

use {
    crate::extension::ExtensionKind,
    serde_derive::Serialize,
    std::{collections::BTreeSet, fmt},
};

/// Named configuration pattern a mint may match.
///
/// Archetypes overlap; a mint can match several at once.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Regulated token whose balances may be confidential
    RestrictedTransfer,
    /// Token confined to approved holders, balances public
    ClosedLoop,
    /// Security with a display multiplier for corporate actions
    ScaledSecurity,
    /// None of the above
    Unknown,
}

impl Archetype {
    /// Stable display name
    pub fn name(self) -> &'static str {
        match self {
            Archetype::RestrictedTransfer => "restricted-transfer",
            Archetype::ClosedLoop => "closed-loop",
            Archetype::ScaledSecurity => "scaled-security",
            Archetype::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const REGULATED_BASE: [ExtensionKind; 3] = [
    ExtensionKind::TokenMetadata,
    ExtensionKind::PermanentDelegate,
    ExtensionKind::DefaultAccountState,
];

/// Archetypes matched by a set of extension kinds.
///
/// Only membership matters: order and duplicates in `kinds` do not change the
/// result, which is sorted. Returns `[Unknown]` when nothing matches.
pub fn detect_archetypes<I>(kinds: I) -> Vec<Archetype>
where
    I: IntoIterator<Item = ExtensionKind>,
{
    let kinds: BTreeSet<ExtensionKind> = kinds.into_iter().collect();
    let has_all = |required: &[ExtensionKind]| required.iter().all(|k| kinds.contains(k));
    let regulated = has_all(&REGULATED_BASE);
    let confidential = kinds.contains(&ExtensionKind::ConfidentialBalances);

    let mut archetypes = vec![];
    if regulated && confidential {
        archetypes.push(Archetype::RestrictedTransfer);
    }
    if regulated && !confidential {
        archetypes.push(Archetype::ClosedLoop);
    }
    if regulated && kinds.contains(&ExtensionKind::ScaledUiAmount) {
        archetypes.push(Archetype::ScaledSecurity);
    }
    if archetypes.is_empty() {
        archetypes.push(Archetype::Unknown);
    }
    archetypes
}
