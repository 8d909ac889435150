//! Error types

use {
    crate::{access_control::list::ListMode, extension::ExtensionKind},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    thiserror::Error,
};

/// Broad class of a [`TokenTemplateError`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Local pre-flight check failed, no network read involved
    Validation,
    /// On-chain state does not match what the request assumes
    StateMismatch,
    /// The requested transition is not allowed from the current state
    Precondition,
    /// The network-read collaborator failed
    Transport,
}

/// Errors that may be returned while building token instructions.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TokenTemplateError {
    // 0
    /// Transfer fee basis points must lie within 0..=10000
    #[error("Transfer fee basis points {0} outside of [0, 10000]")]
    InvalidTransferFeeBasisPoints(u16),
    /// Interest rate must not be negative
    #[error("Interest rate {0} must not be negative")]
    NegativeInterestRate(i16),
    /// Scaled UI amount multiplier must be finite and positive
    #[error("Scaled UI amount multiplier must be a finite positive number")]
    InvalidScaledUiMultiplier,
    /// Transfer hook extension enabled without a hook program
    #[error("Transfer hook extension requires a transfer hook program address")]
    MissingTransferHookProgram,
    /// The same extension kind was added twice
    #[error("Extension {0} added more than once")]
    DuplicateExtension(ExtensionKind),

    // 5
    /// Post-init metadata needs the mint authority to co-sign
    #[error("Token metadata requires the mint authority to be a signer")]
    MintAuthorityNotSigner,
    /// A signer was required but only an address was supplied
    #[error("{0} must be a signer")]
    SignerRequired(&'static str),
    /// The token instruction constructor rejected its arguments
    #[error("Invalid instruction arguments: {0}")]
    Program(#[from] ProgramError),
    /// Program configuration could not be parsed
    #[error("Invalid program configuration: {0}")]
    InvalidConfig(String),
    /// Metadata stored in the mint needs a pointer to the mint itself
    #[error("Metadata pointer targets {actual:?}, metadata is stored in mint {expected}")]
    MetadataPointerMismatch {
        /// The mint being created
        expected: Pubkey,
        /// Pointer target, `None` without a pointer
        actual: Option<Pubkey>,
    },
    /// Additional metadata fields are signed by the update authority, which
    /// only the mint authority can provide here
    #[error("Metadata update authority {0} must be the mint authority to write additional fields")]
    UpdateAuthorityNotSigner(Pubkey),

    // 11
    /// No account exists at the mint address
    #[error("Mint {0} not found")]
    MintNotFound(Pubkey),
    /// Account exists but is not a mint of the configured token program
    #[error("Account {0} is not a mint owned by the token program")]
    InvalidMintAccount(Pubkey),
    /// Token account holds tokens of another mint
    #[error("Token account {account} belongs to mint {actual}, expected {expected}")]
    TokenAccountMintMismatch {
        /// Token account address
        account: Pubkey,
        /// Mint the caller asked for
        expected: Pubkey,
        /// Mint recorded in the token account
        actual: Pubkey,
    },
    /// No token account exists at the address
    #[error("Token account {0} not found")]
    TokenAccountNotFound(Pubkey),
    /// Account exists but is not a token account of the configured token
    /// program
    #[error("Account {0} is not a token account owned by the token program")]
    InvalidTokenAccount(Pubkey),
    /// The supplied delegate is not the mint's permanent delegate
    #[error("Permanent delegate mismatch: mint has {expected:?}, got {actual}")]
    PermanentDelegateMismatch {
        /// Delegate configured on the mint
        expected: Option<Pubkey>,
        /// Delegate supplied by the caller
        actual: Pubkey,
    },

    // 17
    /// List operation does not match the list's mode
    #[error("Operation requires a {expected} list, found {actual:?}")]
    WrongListMode {
        /// Mode the operation needs
        expected: ListMode,
        /// Mode configured on the list or inferred from the mint
        actual: Option<ListMode>,
    },
    /// List account missing or not owned by the list program
    #[error("Account {0} is not a list owned by the list program")]
    InvalidListAccount(Pubkey),
    /// Gating is active but no list account was supplied
    #[error("Gating is active for this mint, a list account is required")]
    ListRequired,
    /// Current authority for a role does not match the supplied one
    #[error("{role} authority is {expected:?}, not {actual}")]
    AuthorityMismatch {
        /// Role being checked
        role: String,
        /// Authority recorded on-chain
        expected: Option<Pubkey>,
        /// Authority supplied by the caller
        actual: Pubkey,
    },
    /// Operation requires an extension the mint does not carry
    #[error("Mint does not carry the {0} extension")]
    MissingExtension(ExtensionKind),

    // 22
    /// Mint is already paused
    #[error("Mint is already paused")]
    AlreadyPaused,
    /// Mint is not paused
    #[error("Mint is not paused")]
    NotPaused,
    /// Same-transaction gating setup needs fee payer and mint authority to be
    /// the same signer
    #[error("Gating setup requires the fee payer to be the mint authority signer")]
    GatingRequiresSameSigner,

    // 25
    /// Failure reported by the network-read collaborator
    #[error("Transport error: {0}")]
    Transport(String),
}

impl TokenTemplateError {
    /// Category of this error
    pub fn category(&self) -> ErrorCategory {
        use TokenTemplateError::*;
        match self {
            InvalidTransferFeeBasisPoints(_)
            | NegativeInterestRate(_)
            | InvalidScaledUiMultiplier
            | MissingTransferHookProgram
            | DuplicateExtension(_)
            | MintAuthorityNotSigner
            | SignerRequired(_)
            | Program(_)
            | InvalidConfig(_)
            | MetadataPointerMismatch { .. }
            | UpdateAuthorityNotSigner(_) => ErrorCategory::Validation,
            MintNotFound(_)
            | InvalidMintAccount(_)
            | TokenAccountMintMismatch { .. }
            | TokenAccountNotFound(_)
            | InvalidTokenAccount(_)
            | PermanentDelegateMismatch { .. }
            | WrongListMode { .. }
            | InvalidListAccount(_)
            | ListRequired
            | AuthorityMismatch { .. }
            | MissingExtension(_) => ErrorCategory::StateMismatch,
            AlreadyPaused | NotPaused | GatingRequiresSameSigner => ErrorCategory::Precondition,
            Transport(_) => ErrorCategory::Transport,
        }
    }
}

impl From<solana_client::client_error::ClientError> for TokenTemplateError {
    fn from(e: solana_client::client_error::ClientError) -> Self {
        TokenTemplateError::Transport(e.to_string())
    }
}
