//! Account inspection: decode mint and token accounts into typed views

use {
    crate::{
        config::ProgramConfig,
        extension::{ExtensionDescriptor, ExtensionKind, MetadataFields},
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_program_error::ProgramError,
    solana_program_option::COption,
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    solana_zk_sdk::encryption::pod::elgamal::PodElGamalPubkey,
    spl_token_2022::{
        extension::{
            confidential_transfer::ConfidentialTransferMint,
            default_account_state::DefaultAccountState, interest_bearing_mint::InterestBearingConfig,
            metadata_pointer::MetadataPointer, pausable::PausableConfig,
            permanent_delegate::PermanentDelegate, scaled_ui_amount::ScaledUiAmountConfig,
            transfer_fee::TransferFeeConfig, transfer_hook::TransferHook, BaseStateWithExtensions,
            ExtensionType, PodStateWithExtensions,
        },
        pod::{PodAccount, PodMint},
        state::{Account, AccountState},
    },
    spl_token_metadata_interface::state::TokenMetadata,
};

/// Every authority of a mint in one place.
///
/// On-chain most authorities live inside the extension they govern; this
/// record flattens them for lookups and display.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintAuthorities {
    /// Mint authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub mint_authority: Option<Pubkey>,
    /// Freeze authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub freeze_authority: Option<Pubkey>,
    /// Update authority of the metadata stored in the mint
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub metadata_authority: Option<Pubkey>,
    /// Authority of the metadata pointer
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub metadata_pointer_authority: Option<Pubkey>,
    /// Pause authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub pausable_authority: Option<Pubkey>,
    /// Permanent delegate
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub permanent_delegate: Option<Pubkey>,
    /// Confidential balances authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub confidential_balances_authority: Option<Pubkey>,
    /// Scaled UI amount multiplier authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub scaled_ui_amount_authority: Option<Pubkey>,
    /// Transfer fee config authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub transfer_fee_config_authority: Option<Pubkey>,
    /// Withheld fee withdraw authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub withdraw_withheld_authority: Option<Pubkey>,
    /// Interest rate authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub interest_rate_authority: Option<Pubkey>,
    /// Transfer hook authority
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub transfer_hook_authority: Option<Pubkey>,
}

/// Read-only projection of a mint account
#[derive(Clone, Debug, PartialEq)]
pub struct MintAccountView {
    /// Mint address
    pub address: Pubkey,
    /// Decimals
    pub decimals: u8,
    /// Raw supply
    pub supply: u64,
    /// Mint authority
    pub mint_authority: Option<Pubkey>,
    /// Freeze authority
    pub freeze_authority: Option<Pubkey>,
    /// Catalog extensions in on-chain order
    pub extensions: Vec<ExtensionDescriptor>,
    /// Extensions outside the catalog
    pub other_extensions: Vec<ExtensionType>,
    /// Flattened authorities
    pub authorities: MintAuthorities,
    /// Whether the pausable extension is currently paused
    pub paused: bool,
}

impl MintAccountView {
    /// Kinds of the catalog extensions
    pub fn kinds(&self) -> Vec<ExtensionKind> {
        self.extensions.iter().map(|e| e.kind()).collect()
    }

    /// Descriptor of `kind`, if present
    pub fn extension(&self, kind: ExtensionKind) -> Option<&ExtensionDescriptor> {
        self.extensions.iter().find(|e| e.kind() == kind)
    }

    /// Whether the mint carries `kind`
    pub fn has_extension(&self, kind: ExtensionKind) -> bool {
        self.extension(kind).is_some()
    }

    /// Configured default account state, if the extension is present
    pub fn default_account_state(&self) -> Option<AccountState> {
        self.extensions.iter().find_map(|e| match e {
            ExtensionDescriptor::DefaultAccountState { state } => Some(*state),
            _ => None,
        })
    }
}

fn account_state_from_u8(state: u8) -> Result<AccountState> {
    match state {
        0 => Ok(AccountState::Uninitialized),
        1 => Ok(AccountState::Initialized),
        2 => Ok(AccountState::Frozen),
        _ => Err(ProgramError::InvalidAccountData.into()),
    }
}

/// Decode raw mint data
pub fn unpack_mint(address: &Pubkey, data: &[u8]) -> Result<MintAccountView> {
    let state = PodStateWithExtensions::<PodMint>::unpack(data)?;
    let mint_authority = state.base.mint_authority.ok_or(()).ok();
    let freeze_authority = state.base.freeze_authority.ok_or(()).ok();

    let mut authorities = MintAuthorities {
        mint_authority,
        freeze_authority,
        ..MintAuthorities::default()
    };
    let mut extensions = vec![];
    let mut other_extensions = vec![];
    let mut paused = false;

    for extension_type in state.get_extension_types()? {
        let Some(kind) = ExtensionKind::from_extension_type(extension_type) else {
            other_extensions.push(extension_type);
            continue;
        };
        let descriptor = match kind {
            ExtensionKind::MetadataPointer => {
                let ext = state.get_extension::<MetadataPointer>()?;
                authorities.metadata_pointer_authority = ext.authority.into();
                ExtensionDescriptor::MetadataPointer {
                    authority: ext.authority.into(),
                    metadata_address: ext.metadata_address.into(),
                }
            }
            ExtensionKind::TokenMetadata => {
                let metadata = state.get_variable_len_extension::<TokenMetadata>()?;
                authorities.metadata_authority = metadata.update_authority.into();
                ExtensionDescriptor::TokenMetadata(MetadataFields {
                    update_authority: metadata.update_authority.into(),
                    name: metadata.name,
                    symbol: metadata.symbol,
                    uri: metadata.uri,
                    additional_metadata: metadata.additional_metadata,
                })
            }
            ExtensionKind::PermanentDelegate => {
                let ext = state.get_extension::<PermanentDelegate>()?;
                authorities.permanent_delegate = ext.delegate.into();
                ExtensionDescriptor::PermanentDelegate {
                    delegate: Option::<Pubkey>::from(ext.delegate).unwrap_or_default(),
                }
            }
            ExtensionKind::Pausable => {
                let ext = state.get_extension::<PausableConfig>()?;
                authorities.pausable_authority = ext.authority.into();
                paused = bool::from(ext.paused);
                ExtensionDescriptor::Pausable {
                    authority: Option::<Pubkey>::from(ext.authority).unwrap_or_default(),
                }
            }
            ExtensionKind::DefaultAccountState => {
                let ext = state.get_extension::<DefaultAccountState>()?;
                ExtensionDescriptor::DefaultAccountState {
                    state: account_state_from_u8(ext.state)?,
                }
            }
            ExtensionKind::ConfidentialBalances => {
                let ext = state.get_extension::<ConfidentialTransferMint>()?;
                authorities.confidential_balances_authority = ext.authority.into();
                ExtensionDescriptor::ConfidentialBalances {
                    authority: ext.authority.into(),
                    auto_approve_new_accounts: bool::from(ext.auto_approve_new_accounts),
                    auditor_elgamal_pubkey: Option::<PodElGamalPubkey>::from(
                        ext.auditor_elgamal_pubkey,
                    ),
                }
            }
            ExtensionKind::ScaledUiAmount => {
                let ext = state.get_extension::<ScaledUiAmountConfig>()?;
                authorities.scaled_ui_amount_authority = ext.authority.into();
                ExtensionDescriptor::ScaledUiAmount {
                    authority: ext.authority.into(),
                    multiplier: f64::from(ext.multiplier),
                }
            }
            ExtensionKind::TransferFee => {
                let ext = state.get_extension::<TransferFeeConfig>()?;
                authorities.transfer_fee_config_authority = ext.transfer_fee_config_authority.into();
                authorities.withdraw_withheld_authority = ext.withdraw_withheld_authority.into();
                ExtensionDescriptor::TransferFee {
                    transfer_fee_config_authority: ext.transfer_fee_config_authority.into(),
                    withdraw_withheld_authority: ext.withdraw_withheld_authority.into(),
                    transfer_fee_basis_points: u16::from(
                        ext.newer_transfer_fee.transfer_fee_basis_points,
                    ),
                    maximum_fee: u64::from(ext.newer_transfer_fee.maximum_fee),
                }
            }
            ExtensionKind::InterestBearing => {
                let ext = state.get_extension::<InterestBearingConfig>()?;
                authorities.interest_rate_authority = ext.rate_authority.into();
                ExtensionDescriptor::InterestBearing {
                    rate_authority: ext.rate_authority.into(),
                    rate: i16::from(ext.current_rate),
                }
            }
            ExtensionKind::NonTransferable => ExtensionDescriptor::NonTransferable,
            ExtensionKind::TransferHook => {
                let ext = state.get_extension::<TransferHook>()?;
                authorities.transfer_hook_authority = ext.authority.into();
                ExtensionDescriptor::TransferHook {
                    authority: ext.authority.into(),
                    program_id: ext.program_id.into(),
                }
            }
        };
        extensions.push(descriptor);
    }

    Ok(MintAccountView {
        address: *address,
        decimals: state.base.decimals,
        supply: u64::from(state.base.supply),
        mint_authority,
        freeze_authority,
        extensions,
        other_extensions,
        authorities,
        paused,
    })
}

/// Fetch and decode a mint.
///
/// Fails with `MintNotFound` when there is no account and
/// `InvalidMintAccount` when the account is not a mint of the configured
/// token program.
pub async fn inspect_mint<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
) -> Result<MintAccountView> {
    let account = ledger
        .get_account_info(mint)
        .await?
        .ok_or(TokenTemplateError::MintNotFound(*mint))?;
    if account.owner != config.token_program {
        return Err(TokenTemplateError::InvalidMintAccount(*mint));
    }
    let view = unpack_mint(mint, &account.data).map_err(|e| match e {
        TokenTemplateError::Program(_) => TokenTemplateError::InvalidMintAccount(*mint),
        e => e,
    })?;
    log::trace!("Inspected mint {}: {:?}", mint, view.kinds());
    Ok(view)
}

/// Read-only projection of a token account
#[derive(Clone, Debug, PartialEq)]
pub struct TokenAccountView {
    /// Token account address
    pub address: Pubkey,
    /// Mint of the held tokens
    pub mint: Pubkey,
    /// Wallet owning the account
    pub owner: Pubkey,
    /// Raw balance
    pub amount: u64,
    /// Whether the account is frozen
    pub frozen: bool,
}

impl TokenAccountView {
    /// Decode raw token account data
    pub fn unpack(address: &Pubkey, data: &[u8]) -> Result<Self> {
        let state = PodStateWithExtensions::<PodAccount>::unpack(data)?;
        Ok(Self {
            address: *address,
            mint: state.base.mint,
            owner: state.base.owner,
            amount: u64::from(state.base.amount),
            frozen: state.base.state == AccountState::Frozen as u8,
        })
    }

    /// Data of a token account that does not exist yet, as it will look
    /// right after creation in `state`
    pub fn synthesize_data(mint: &Pubkey, owner: &Pubkey, state: AccountState) -> Result<Vec<u8>> {
        let account = Account {
            mint: *mint,
            owner: *owner,
            amount: 0,
            delegate: COption::None,
            state,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0; Account::LEN];
        Account::pack(account, &mut data)?;
        Ok(data)
    }

    /// View of a token account about to be created at `address`, decoded from
    /// synthesized data so it goes through the same path as a fetched one
    pub fn pending(
        address: &Pubkey,
        mint: &Pubkey,
        owner: &Pubkey,
        state: AccountState,
    ) -> Result<Self> {
        Self::unpack(address, &Self::synthesize_data(mint, owner, state)?)
    }
}

/// Fetch and decode a token account, `None` if it does not exist.
///
/// Fails with `InvalidTokenAccount` when the account is not a token account of
/// the configured token program.
pub async fn fetch_token_account<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    address: &Pubkey,
) -> Result<Option<TokenAccountView>> {
    let Some(account) = ledger.get_account_info(address).await? else {
        return Ok(None);
    };
    if account.owner != config.token_program {
        return Err(TokenTemplateError::InvalidTokenAccount(*address));
    }
    TokenAccountView::unpack(address, &account.data)
        .map(Some)
        .map_err(|e| match e {
            TokenTemplateError::Program(_) => TokenTemplateError::InvalidTokenAccount(*address),
            e => e,
        })
}
