//! Authority transitions: hand over or revoke one authority of a mint

use {
    crate::{
        config::ProgramConfig,
        extension::ExtensionKind,
        inspector::{inspect_mint, MintAccountView, MintAuthorities},
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    spl_pod::optional_keys::OptionalNonZeroPubkey,
    spl_token_2022::instruction::{set_authority, AuthorityType},
    spl_token_metadata_interface::instruction::update_authority as update_metadata_authority,
    std::fmt,
};

/// Which authority to change
#[derive(Clone, Debug, PartialEq)]
pub enum AuthorityRole {
    /// Update authority of the metadata stored in the mint
    Metadata,
    /// Any authority the token program manages through `SetAuthority`
    Token(AuthorityType),
}

impl AuthorityRole {
    /// Authority currently recorded for this role, `None` if unset or not
    /// tracked
    pub fn current(&self, authorities: &MintAuthorities) -> Option<Pubkey> {
        match self {
            AuthorityRole::Metadata => authorities.metadata_authority,
            AuthorityRole::Token(authority_type) => match authority_type {
                AuthorityType::MintTokens => authorities.mint_authority,
                AuthorityType::FreezeAccount => authorities.freeze_authority,
                AuthorityType::TransferFeeConfig => authorities.transfer_fee_config_authority,
                AuthorityType::WithheldWithdraw => authorities.withdraw_withheld_authority,
                AuthorityType::InterestRate => authorities.interest_rate_authority,
                AuthorityType::PermanentDelegate => authorities.permanent_delegate,
                AuthorityType::ConfidentialTransferMint => {
                    authorities.confidential_balances_authority
                }
                AuthorityType::TransferHookProgramId => authorities.transfer_hook_authority,
                AuthorityType::MetadataPointer => authorities.metadata_pointer_authority,
                AuthorityType::ScaledUiAmount => authorities.scaled_ui_amount_authority,
                AuthorityType::Pause => authorities.pausable_authority,
                _ => None,
            },
        }
    }
}

impl fmt::Display for AuthorityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorityRole::Metadata => f.write_str("Metadata"),
            AuthorityRole::Token(authority_type) => write!(f, "{authority_type:?}"),
        }
    }
}

fn transition(
    config: &ProgramConfig,
    mint: &Pubkey,
    role: &AuthorityRole,
    current: &Pubkey,
    new: Option<&Pubkey>,
) -> Result<Instruction> {
    log::debug!("{} authority of {}: {} -> {:?}", role, mint, current, new);
    match role {
        AuthorityRole::Metadata => Ok(update_metadata_authority(
            &config.token_program,
            mint,
            current,
            OptionalNonZeroPubkey::try_from(new.copied())?,
        )),
        AuthorityRole::Token(authority_type) => Ok(set_authority(
            &config.token_program,
            mint,
            new,
            authority_type.clone(),
            current,
            &[],
        )?),
    }
}

/// Hand `role` over from `current` to `new`
pub fn update_authority(
    config: &ProgramConfig,
    mint: &Pubkey,
    role: &AuthorityRole,
    current: &Pubkey,
    new: &Pubkey,
) -> Result<Instruction> {
    transition(config, mint, role, current, Some(new))
}

/// Revoke `role`; nobody holds it afterwards
pub fn remove_authority(
    config: &ProgramConfig,
    mint: &Pubkey,
    role: &AuthorityRole,
    current: &Pubkey,
) -> Result<Instruction> {
    transition(config, mint, role, current, None)
}

/// Fail unless `current` holds `role` on `mint`
pub fn verify_authority(
    mint: &MintAccountView,
    role: &AuthorityRole,
    current: &Pubkey,
) -> Result<()> {
    if *role == AuthorityRole::Metadata && !mint.has_extension(ExtensionKind::TokenMetadata) {
        return Err(TokenTemplateError::MissingExtension(ExtensionKind::TokenMetadata));
    }
    let expected = role.current(&mint.authorities);
    if expected != Some(*current) {
        return Err(TokenTemplateError::AuthorityMismatch {
            role: role.to_string(),
            expected,
            actual: *current,
        });
    }
    Ok(())
}

/// [`update_authority`] after checking `current` against the mint
pub async fn update_authority_checked<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    role: &AuthorityRole,
    current: &Pubkey,
    new: &Pubkey,
) -> Result<Instruction> {
    let view = inspect_mint(ledger, config, mint).await?;
    verify_authority(&view, role, current)?;
    update_authority(config, mint, role, current, new)
}

/// [`remove_authority`] after checking `current` against the mint
pub async fn remove_authority_checked<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    role: &AuthorityRole,
    current: &Pubkey,
) -> Result<Instruction> {
    let view = inspect_mint(ledger, config, mint).await?;
    verify_authority(&view, role, current)?;
    remove_authority(config, mint, role, current)
}
