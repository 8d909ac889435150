//! Extension catalog: typed descriptors for optional mint behaviors

use {
    crate::{Result, TokenTemplateError},
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    solana_zk_sdk::encryption::pod::elgamal::PodElGamalPubkey,
    spl_token_2022::{
        extension::{
            confidential_transfer::instruction::initialize_mint as initialize_confidential_transfer_mint,
            default_account_state::instruction::initialize_default_account_state,
            interest_bearing_mint::instruction::initialize as initialize_interest_bearing_mint,
            metadata_pointer::instruction::initialize as initialize_metadata_pointer,
            pausable::instruction::initialize as initialize_pausable,
            scaled_ui_amount::instruction::initialize as initialize_scaled_ui_amount,
            transfer_fee::instruction::initialize_transfer_fee_config,
            transfer_hook::instruction::initialize as initialize_transfer_hook, ExtensionType,
        },
        instruction::{initialize_non_transferable_mint, initialize_permanent_delegate},
        state::AccountState,
    },
    spl_token_metadata_interface::state::TokenMetadata,
    std::fmt,
};

/// Upper bound for transfer fee basis points (100%)
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000;

/// When an extension has to be written relative to the mint initialization
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OrderingClass {
    /// Written to the account before the mint is initialized
    PreInit,
    /// Carried as parameters of the mint initialization itself
    InitTime,
    /// Requires an initialized mint; its storage is allocated on write
    PostInit,
}

/// Name of an extension, without its configuration
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ExtensionKind {
    /// Pointer to the account holding the token metadata
    MetadataPointer,
    /// Name, symbol, uri and additional fields stored in the mint
    TokenMetadata,
    /// Delegate able to move or burn from any account of the mint
    PermanentDelegate,
    /// Authority able to pause minting, burning and transfers
    Pausable,
    /// State new token accounts start in
    DefaultAccountState,
    /// Confidential balances and transfers
    ConfidentialBalances,
    /// Display multiplier applied to raw amounts
    ScaledUiAmount,
    /// Fee withheld on every transfer
    TransferFee,
    /// Continuously compounding display interest
    InterestBearing,
    /// Tokens cannot leave the account they were minted to
    NonTransferable,
    /// Program invoked on every transfer
    TransferHook,
}

impl ExtensionKind {
    /// Every kind, in catalog order
    pub const ALL: [ExtensionKind; 11] = [
        ExtensionKind::MetadataPointer,
        ExtensionKind::TokenMetadata,
        ExtensionKind::PermanentDelegate,
        ExtensionKind::Pausable,
        ExtensionKind::DefaultAccountState,
        ExtensionKind::ConfidentialBalances,
        ExtensionKind::ScaledUiAmount,
        ExtensionKind::TransferFee,
        ExtensionKind::InterestBearing,
        ExtensionKind::NonTransferable,
        ExtensionKind::TransferHook,
    ];

    /// Fixed ordering class of the kind
    pub fn ordering_class(self) -> OrderingClass {
        match self {
            ExtensionKind::TokenMetadata => OrderingClass::PostInit,
            _ => OrderingClass::PreInit,
        }
    }

    /// On-chain extension type
    pub fn extension_type(self) -> ExtensionType {
        match self {
            ExtensionKind::MetadataPointer => ExtensionType::MetadataPointer,
            ExtensionKind::TokenMetadata => ExtensionType::TokenMetadata,
            ExtensionKind::PermanentDelegate => ExtensionType::PermanentDelegate,
            ExtensionKind::Pausable => ExtensionType::Pausable,
            ExtensionKind::DefaultAccountState => ExtensionType::DefaultAccountState,
            ExtensionKind::ConfidentialBalances => ExtensionType::ConfidentialTransferMint,
            ExtensionKind::ScaledUiAmount => ExtensionType::ScaledUiAmount,
            ExtensionKind::TransferFee => ExtensionType::TransferFeeConfig,
            ExtensionKind::InterestBearing => ExtensionType::InterestBearingConfig,
            ExtensionKind::NonTransferable => ExtensionType::NonTransferable,
            ExtensionKind::TransferHook => ExtensionType::TransferHook,
        }
    }

    /// Kind for an on-chain extension type, `None` if not in the catalog
    pub fn from_extension_type(extension_type: ExtensionType) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension_type() == extension_type)
    }

    /// Stable display name
    pub fn name(self) -> &'static str {
        match self {
            ExtensionKind::MetadataPointer => "metadata-pointer",
            ExtensionKind::TokenMetadata => "metadata",
            ExtensionKind::PermanentDelegate => "permanent-delegate",
            ExtensionKind::Pausable => "pausable",
            ExtensionKind::DefaultAccountState => "default-account-state",
            ExtensionKind::ConfidentialBalances => "confidential-balances",
            ExtensionKind::ScaledUiAmount => "scaled-ui-amount",
            ExtensionKind::TransferFee => "transfer-fee",
            ExtensionKind::InterestBearing => "interest-bearing",
            ExtensionKind::NonTransferable => "non-transferable",
            ExtensionKind::TransferHook => "transfer-hook",
        }
    }
}

impl fmt::Display for ExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text fields of the metadata stored in the mint
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataFields {
    /// Authority allowed to update the fields, the mint authority if `None`
    pub update_authority: Option<Pubkey>,
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Uri of the off-chain json
    pub uri: String,
    /// Extra key/value pairs, written in order after initialization
    pub additional_metadata: Vec<(String, String)>,
}

impl MetadataFields {
    /// The on-chain value these fields produce for `mint`
    pub fn to_token_metadata(&self, mint: &Pubkey) -> Result<TokenMetadata> {
        Ok(TokenMetadata {
            update_authority: self.update_authority.try_into()?,
            mint: *mint,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            additional_metadata: self.additional_metadata.clone(),
        })
    }
}

/// One optional behavior of a mint and its configuration.
///
/// Descriptors are plain values; a composition owns them until they are turned
/// into instructions.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionDescriptor {
    /// Where the metadata lives
    MetadataPointer {
        /// Authority able to move the pointer
        authority: Option<Pubkey>,
        /// Metadata account, usually the mint itself
        metadata_address: Option<Pubkey>,
    },
    /// Metadata stored in the mint
    TokenMetadata(MetadataFields),
    /// Permanent delegate
    PermanentDelegate {
        /// The delegate
        delegate: Pubkey,
    },
    /// Pausable mint
    Pausable {
        /// Authority able to pause and resume
        authority: Pubkey,
    },
    /// Default state of new token accounts
    DefaultAccountState {
        /// `Frozen` or `Initialized`
        state: AccountState,
    },
    /// Confidential balances
    ConfidentialBalances {
        /// Authority over the confidential settings
        authority: Option<Pubkey>,
        /// Whether new accounts may use confidential balances without approval
        auto_approve_new_accounts: bool,
        /// Auditor able to decrypt transfer amounts
        auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
    },
    /// Scaled UI amount
    ScaledUiAmount {
        /// Authority able to change the multiplier
        authority: Option<Pubkey>,
        /// Display multiplier
        multiplier: f64,
    },
    /// Transfer fee
    TransferFee {
        /// Authority able to change the fee
        transfer_fee_config_authority: Option<Pubkey>,
        /// Authority able to withdraw withheld fees
        withdraw_withheld_authority: Option<Pubkey>,
        /// Fee in basis points of the transferred amount
        transfer_fee_basis_points: u16,
        /// Maximum fee per transfer, in raw units
        maximum_fee: u64,
    },
    /// Interest bearing
    InterestBearing {
        /// Authority able to change the rate
        rate_authority: Option<Pubkey>,
        /// Annual rate in basis points
        rate: i16,
    },
    /// Non-transferable tokens
    NonTransferable,
    /// Transfer hook
    TransferHook {
        /// Authority able to change the hook program
        authority: Option<Pubkey>,
        /// Program invoked on transfer
        program_id: Option<Pubkey>,
    },
}

impl ExtensionDescriptor {
    /// Kind of this descriptor
    pub fn kind(&self) -> ExtensionKind {
        match self {
            ExtensionDescriptor::MetadataPointer { .. } => ExtensionKind::MetadataPointer,
            ExtensionDescriptor::TokenMetadata(_) => ExtensionKind::TokenMetadata,
            ExtensionDescriptor::PermanentDelegate { .. } => ExtensionKind::PermanentDelegate,
            ExtensionDescriptor::Pausable { .. } => ExtensionKind::Pausable,
            ExtensionDescriptor::DefaultAccountState { .. } => ExtensionKind::DefaultAccountState,
            ExtensionDescriptor::ConfidentialBalances { .. } => ExtensionKind::ConfidentialBalances,
            ExtensionDescriptor::ScaledUiAmount { .. } => ExtensionKind::ScaledUiAmount,
            ExtensionDescriptor::TransferFee { .. } => ExtensionKind::TransferFee,
            ExtensionDescriptor::InterestBearing { .. } => ExtensionKind::InterestBearing,
            ExtensionDescriptor::NonTransferable => ExtensionKind::NonTransferable,
            ExtensionDescriptor::TransferHook { .. } => ExtensionKind::TransferHook,
        }
    }

    /// Fixed ordering class of this descriptor's kind
    pub fn ordering_class(&self) -> OrderingClass {
        self.kind().ordering_class()
    }

    /// Local checks on the descriptor's parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            ExtensionDescriptor::TransferFee {
                transfer_fee_basis_points,
                ..
            } if *transfer_fee_basis_points > MAX_FEE_BASIS_POINTS => Err(
                TokenTemplateError::InvalidTransferFeeBasisPoints(*transfer_fee_basis_points),
            ),
            ExtensionDescriptor::InterestBearing { rate, .. } if *rate < 0 => {
                Err(TokenTemplateError::NegativeInterestRate(*rate))
            }
            ExtensionDescriptor::ScaledUiAmount { multiplier, .. }
                if !multiplier.is_finite() || *multiplier <= 0.0 =>
            {
                Err(TokenTemplateError::InvalidScaledUiMultiplier)
            }
            ExtensionDescriptor::TransferHook {
                program_id: None, ..
            } => Err(TokenTemplateError::MissingTransferHookProgram),
            _ => Ok(()),
        }
    }

    /// Instruction writing a pre-init extension into an allocated, not yet
    /// initialized mint account. `None` for post-init descriptors.
    pub fn pre_init_instruction(
        &self,
        token_program_id: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Option<Instruction>> {
        let instruction = match self {
            ExtensionDescriptor::MetadataPointer {
                authority,
                metadata_address,
            } => initialize_metadata_pointer(token_program_id, mint, *authority, *metadata_address)?,
            ExtensionDescriptor::TokenMetadata(_) => return Ok(None),
            ExtensionDescriptor::PermanentDelegate { delegate } => {
                initialize_permanent_delegate(token_program_id, mint, delegate)?
            }
            ExtensionDescriptor::Pausable { authority } => {
                initialize_pausable(token_program_id, mint, authority)?
            }
            ExtensionDescriptor::DefaultAccountState { state } => {
                initialize_default_account_state(token_program_id, mint, state)?
            }
            ExtensionDescriptor::ConfidentialBalances {
                authority,
                auto_approve_new_accounts,
                auditor_elgamal_pubkey,
            } => initialize_confidential_transfer_mint(
                token_program_id,
                mint,
                *authority,
                *auto_approve_new_accounts,
                *auditor_elgamal_pubkey,
            )?,
            ExtensionDescriptor::ScaledUiAmount {
                authority,
                multiplier,
            } => initialize_scaled_ui_amount(token_program_id, mint, *authority, *multiplier)?,
            ExtensionDescriptor::TransferFee {
                transfer_fee_config_authority,
                withdraw_withheld_authority,
                transfer_fee_basis_points,
                maximum_fee,
            } => initialize_transfer_fee_config(
                token_program_id,
                mint,
                transfer_fee_config_authority.as_ref(),
                withdraw_withheld_authority.as_ref(),
                *transfer_fee_basis_points,
                *maximum_fee,
            )?,
            ExtensionDescriptor::InterestBearing {
                rate_authority,
                rate,
            } => initialize_interest_bearing_mint(token_program_id, mint, *rate_authority, *rate)?,
            ExtensionDescriptor::NonTransferable => {
                initialize_non_transferable_mint(token_program_id, mint)?
            }
            ExtensionDescriptor::TransferHook {
                authority,
                program_id,
            } => initialize_transfer_hook(token_program_id, mint, *authority, *program_id)?,
        };
        Ok(Some(instruction))
    }
}
