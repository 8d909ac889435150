//! Day-to-day management of a created mint: pause, mint, and the permanent
//! delegate's forced transfers and burns

use {
    crate::{
        authority::{verify_authority, AuthorityRole},
        config::ProgramConfig,
        extension::ExtensionKind,
        inspector::{fetch_token_account, inspect_mint, MintAccountView, TokenAccountView},
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    spl_associated_token_account_client::{
        address::get_associated_token_address_with_program_id,
        instruction::create_associated_token_account_idempotent,
    },
    spl_token_2022::{
        extension::pausable::instruction::{pause as pause_mint, resume as resume_mint},
        instruction::{burn_checked, mint_to_checked, transfer_checked, AuthorityType},
    },
};

fn require_pausable(mint: &MintAccountView, authority: &Pubkey) -> Result<()> {
    if !mint.has_extension(ExtensionKind::Pausable) {
        return Err(TokenTemplateError::MissingExtension(ExtensionKind::Pausable));
    }
    verify_authority(mint, &AuthorityRole::Token(AuthorityType::Pause), authority)
}

/// Pause minting, burning and transfers
pub fn pause(
    config: &ProgramConfig,
    mint: &MintAccountView,
    authority: &Pubkey,
) -> Result<Instruction> {
    require_pausable(mint, authority)?;
    if mint.paused {
        return Err(TokenTemplateError::AlreadyPaused);
    }
    Ok(pause_mint(&config.token_program, &mint.address, authority, &[])?)
}

/// Resume a paused mint
pub fn resume(
    config: &ProgramConfig,
    mint: &MintAccountView,
    authority: &Pubkey,
) -> Result<Instruction> {
    require_pausable(mint, authority)?;
    if !mint.paused {
        return Err(TokenTemplateError::NotPaused);
    }
    Ok(resume_mint(&config.token_program, &mint.address, authority, &[])?)
}

/// Mint `amount` to `wallet`, creating its associated token account if needed
pub fn mint_to(
    config: &ProgramConfig,
    mint: &MintAccountView,
    authority: &Pubkey,
    payer: &Pubkey,
    wallet: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    verify_authority(
        mint,
        &AuthorityRole::Token(AuthorityType::MintTokens),
        authority,
    )?;
    let destination =
        get_associated_token_address_with_program_id(wallet, &mint.address, &config.token_program);
    Ok(vec![
        create_associated_token_account_idempotent(
            payer,
            wallet,
            &mint.address,
            &config.token_program,
        ),
        mint_to_checked(
            &config.token_program,
            &mint.address,
            &destination,
            authority,
            &[],
            amount,
            mint.decimals,
        )?,
    ])
}

fn require_permanent_delegate(
    mint: &MintAccountView,
    delegate: &Pubkey,
    source: &TokenAccountView,
) -> Result<()> {
    if mint.authorities.permanent_delegate != Some(*delegate) {
        return Err(TokenTemplateError::PermanentDelegateMismatch {
            expected: mint.authorities.permanent_delegate,
            actual: *delegate,
        });
    }
    if source.mint != mint.address {
        return Err(TokenTemplateError::TokenAccountMintMismatch {
            account: source.address,
            expected: mint.address,
            actual: source.mint,
        });
    }
    Ok(())
}

/// Move `amount` out of `source` into `wallet`'s associated token account,
/// authorized by the permanent delegate
pub fn force_transfer(
    config: &ProgramConfig,
    mint: &MintAccountView,
    delegate: &Pubkey,
    payer: &Pubkey,
    source: &TokenAccountView,
    wallet: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    require_permanent_delegate(mint, delegate, source)?;
    let destination =
        get_associated_token_address_with_program_id(wallet, &mint.address, &config.token_program);
    Ok(vec![
        create_associated_token_account_idempotent(
            payer,
            wallet,
            &mint.address,
            &config.token_program,
        ),
        transfer_checked(
            &config.token_program,
            &source.address,
            &mint.address,
            &destination,
            delegate,
            &[],
            amount,
            mint.decimals,
        )?,
    ])
}

/// Burn `amount` from `source`, authorized by the permanent delegate
pub fn force_burn(
    config: &ProgramConfig,
    mint: &MintAccountView,
    delegate: &Pubkey,
    source: &TokenAccountView,
    amount: u64,
) -> Result<Instruction> {
    require_permanent_delegate(mint, delegate, source)?;
    Ok(burn_checked(
        &config.token_program,
        &source.address,
        &mint.address,
        delegate,
        &[],
        amount,
        mint.decimals,
    )?)
}

async fn fetch_mint_and_source<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    source: &Pubkey,
) -> Result<(MintAccountView, TokenAccountView)> {
    let (mint, source_account) = futures::try_join!(
        inspect_mint(ledger, config, mint),
        fetch_token_account(ledger, config, source),
    )?;
    let source_account = source_account.ok_or(TokenTemplateError::TokenAccountNotFound(*source))?;
    Ok((mint, source_account))
}

/// [`pause`] against the mint's current state
pub async fn build_pause<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    authority: &Pubkey,
) -> Result<Instruction> {
    pause(config, &inspect_mint(ledger, config, mint).await?, authority)
}

/// [`resume`] against the mint's current state
pub async fn build_resume<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    authority: &Pubkey,
) -> Result<Instruction> {
    resume(config, &inspect_mint(ledger, config, mint).await?, authority)
}

/// [`mint_to`] against the mint's current state
pub async fn build_mint_to<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
    wallet: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    let view = inspect_mint(ledger, config, mint).await?;
    mint_to(config, &view, authority, payer, wallet, amount)
}

/// [`force_transfer`] against the current state of the mint and `source`
#[allow(clippy::too_many_arguments)]
pub async fn build_force_transfer<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    delegate: &Pubkey,
    payer: &Pubkey,
    source: &Pubkey,
    wallet: &Pubkey,
    amount: u64,
) -> Result<Vec<Instruction>> {
    let (view, source_account) = fetch_mint_and_source(ledger, config, mint, source).await?;
    force_transfer(
        config,
        &view,
        delegate,
        payer,
        &source_account,
        wallet,
        amount,
    )
}

/// [`force_burn`] against the current state of the mint and `source`
pub async fn build_force_burn<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
    delegate: &Pubkey,
    source: &Pubkey,
    amount: u64,
) -> Result<Instruction> {
    let (view, source_account) = fetch_mint_and_source(ledger, config, mint, source).await?;
    force_burn(config, &view, delegate, &source_account, amount)
}
