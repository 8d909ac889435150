//! Authority parameters that are either a bare address or a signer

use {
    solana_pubkey::Pubkey,
    solana_signer::Signer,
    std::{fmt, sync::Arc},
};

/// Signer shared between the builders and whoever signs the transaction
pub type SharedSigner = Arc<dyn Signer + Send + Sync>;

/// An authority supplied by the caller.
///
/// Some instructions only reference an authority, others need it to co-sign.
/// The distinction is made once, here, rather than probed at every call site.
#[derive(Clone)]
pub enum Capability {
    /// Address only, the holder signs elsewhere (or never)
    Address(Pubkey),
    /// Signer able to authorize the transaction
    Signer(SharedSigner),
}

impl Capability {
    /// Wrap any signer
    pub fn signer<S: Signer + Send + Sync + 'static>(signer: S) -> Self {
        Capability::Signer(Arc::new(signer))
    }

    /// Address of the authority
    pub fn pubkey(&self) -> Pubkey {
        match self {
            Capability::Address(address) => *address,
            Capability::Signer(signer) => signer.pubkey(),
        }
    }

    /// Whether this authority can co-sign
    pub fn is_signer(&self) -> bool {
        matches!(self, Capability::Signer(_))
    }

    /// The signer, if any
    pub fn as_signer(&self) -> Option<&SharedSigner> {
        match self {
            Capability::Address(_) => None,
            Capability::Signer(signer) => Some(signer),
        }
    }

    /// True when both are signers for the same address
    pub fn is_same_signer(&self, other: &Capability) -> bool {
        self.is_signer() && other.is_signer() && self.pubkey() == other.pubkey()
    }
}

impl From<Pubkey> for Capability {
    fn from(address: Pubkey) -> Self {
        Capability::Address(address)
    }
}

impl From<SharedSigner> for Capability {
    fn from(signer: SharedSigner) -> Self {
        Capability::Signer(signer)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Address(address) => f.debug_tuple("Address").field(address).finish(),
            Capability::Signer(signer) => f.debug_tuple("Signer").field(&signer.pubkey()).finish(),
        }
    }
}
