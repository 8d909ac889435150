use {
    crate::{
        access_control::{
            gate,
            list::{self, ListConfig, ListMode},
            state::AccessControlState,
        },
        capability::Capability,
        config::ProgramConfig,
        inspector::{fetch_token_account, inspect_mint, MintAccountView, TokenAccountView},
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
    spl_associated_token_account_client::{
        address::get_associated_token_address_with_program_id,
        instruction::create_associated_token_account_idempotent,
    },
    spl_token_2022::{
        instruction::{freeze_account, thaw_account},
        state::AccountState,
    },
};

/// Change of a wallet's list membership
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListAction {
    /// Allow the wallet, thawing its account
    AllowListAdd,
    /// Stop allowing the wallet, freezing its account
    AllowListRemove,
    /// Block the wallet, freezing its account
    BlockListAdd,
    /// Unblock the wallet, thawing its account
    BlockListRemove,
}

impl ListAction {
    /// Mode of the list the action applies to
    pub fn list_mode(self) -> ListMode {
        match self {
            ListAction::AllowListAdd | ListAction::AllowListRemove => ListMode::Allow,
            ListAction::BlockListAdd | ListAction::BlockListRemove => ListMode::Block,
        }
    }

    /// Whether the wallet's account ends up frozen
    pub fn freezes(self) -> bool {
        matches!(self, ListAction::AllowListRemove | ListAction::BlockListAdd)
    }

    fn adds(self) -> bool {
        matches!(self, ListAction::AllowListAdd | ListAction::BlockListAdd)
    }
}

/// A list account as the planner sees it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListView {
    /// List config address
    pub address: Pubkey,
    /// Mode tag, `None` if the stored byte is not a known mode
    pub mode: Option<ListMode>,
}

/// What to change for which wallet
#[derive(Clone, Debug, PartialEq)]
pub struct ListUpdateRequest {
    /// Mint whose accounts are gated
    pub mint: Pubkey,
    /// Wallet whose membership changes; its associated token account is
    /// frozen or thawed
    pub wallet: Pubkey,
    /// Requested change
    pub action: ListAction,
    /// List config, required when gating is active
    pub list_config: Option<Pubkey>,
    /// List authority when gating is active, the mint's freeze authority
    /// otherwise
    pub authority: Pubkey,
    /// Fee payer, also the caller of permissionless instructions
    pub payer: Pubkey,
}

/// Fetch and decode a list config
pub async fn fetch_list<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    address: &Pubkey,
) -> Result<ListView> {
    let account = ledger
        .get_account_info(address)
        .await?
        .filter(|account| account.owner == config.list_program)
        .ok_or(TokenTemplateError::InvalidListAccount(*address))?;
    let list_config = ListConfig::unpack(&account.data)
        .map_err(|_| TokenTemplateError::InvalidListAccount(*address))?;
    Ok(ListView {
        address: *address,
        mode: list_config.list_mode(),
    })
}

/// Accounts of a permissionless freeze or thaw of `token_account`.
///
/// The list program resolves its config and the wallet entry of the token
/// account's owner, so the owner is taken from the account data.
pub fn permissionless_accounts(
    config: &ProgramConfig,
    caller: &Pubkey,
    token_account: &TokenAccountView,
    list_config: &Pubkey,
    thaw: bool,
) -> gate::PermissionlessAccounts {
    let extra_metas = if thaw {
        list::get_thaw_extra_metas_address(&config.list_program, &token_account.mint)
    } else {
        list::get_freeze_extra_metas_address(&config.list_program, &token_account.mint)
    };
    let wallet_entry =
        list::get_wallet_entry_address(&config.list_program, list_config, &token_account.owner);
    gate::PermissionlessAccounts {
        caller: *caller,
        mint: token_account.mint,
        token_account: token_account.address,
        token_account_owner: token_account.owner,
        token_program_id: config.token_program,
        gate_program_id: config.list_program,
        extra_metas,
        resolved: vec![
            AccountMeta::new_readonly(*list_config, false),
            AccountMeta::new_readonly(wallet_entry, false),
        ],
    }
}

/// Build the instructions for a list update from already fetched state.
///
/// `token_account` is `None` when the wallet's associated account does not
/// exist yet. It is then planned against the account as it will be created,
/// in the mint's default state, and created first if it needs a freeze or
/// thaw.
pub fn plan_list_update(
    config: &ProgramConfig,
    mint: &MintAccountView,
    list_view: Option<&ListView>,
    token_account: Option<&TokenAccountView>,
    request: &ListUpdateRequest,
) -> Result<Vec<Instruction>> {
    let state = AccessControlState::from_mint(mint, config);
    let expected_mode = request.action.list_mode();
    let address = get_associated_token_address_with_program_id(
        &request.wallet,
        &mint.address,
        &config.token_program,
    );

    let mut instructions = vec![];
    let gate_list = if state.gating_active {
        let list_view = list_view.ok_or(TokenTemplateError::ListRequired)?;
        if list_view.mode != Some(expected_mode) {
            return Err(TokenTemplateError::WrongListMode {
                expected: expected_mode,
                actual: list_view.mode,
            });
        }
        Some(list_view)
    } else {
        if state.mode != Some(expected_mode) {
            return Err(TokenTemplateError::WrongListMode {
                expected: expected_mode,
                actual: state.mode,
            });
        }
        if mint.freeze_authority != Some(request.authority) {
            return Err(TokenTemplateError::AuthorityMismatch {
                role: "freeze".to_string(),
                expected: mint.freeze_authority,
                actual: request.authority,
            });
        }
        None
    };

    let current = match token_account {
        Some(view) if view.mint != mint.address => {
            return Err(TokenTemplateError::TokenAccountMintMismatch {
                account: view.address,
                expected: mint.address,
                actual: view.mint,
            })
        }
        Some(view) => view.clone(),
        None => TokenAccountView::pending(
            &address,
            &mint.address,
            &request.wallet,
            mint.default_account_state().unwrap_or(AccountState::Initialized),
        )?,
    };

    if let Some(list_view) = gate_list {
        instructions.push(if request.action.adds() {
            list::add_wallet(
                &config.list_program,
                &request.authority,
                &request.payer,
                &list_view.address,
                &request.wallet,
            )
        } else {
            list::remove_wallet(
                &config.list_program,
                &request.authority,
                &list_view.address,
                &request.wallet,
            )
        });
    }

    let freeze = request.action.freezes();
    if current.frozen != freeze {
        if token_account.is_none() {
            instructions.push(create_associated_token_account_idempotent(
                &request.payer,
                &request.wallet,
                &mint.address,
                &config.token_program,
            ));
        }
        instructions.push(match (gate_list, freeze) {
            (Some(list_view), true) => gate::freeze_permissionless(
                &config.gating_program,
                &permissionless_accounts(
                    config,
                    &request.payer,
                    &current,
                    &list_view.address,
                    false,
                ),
            ),
            (Some(list_view), false) => gate::thaw_permissionless(
                &config.gating_program,
                &permissionless_accounts(
                    config,
                    &request.payer,
                    &current,
                    &list_view.address,
                    true,
                ),
            ),
            (None, true) => freeze_account(
                &config.token_program,
                &current.address,
                &mint.address,
                &request.authority,
                &[],
            )?,
            (None, false) => thaw_account(
                &config.token_program,
                &current.address,
                &mint.address,
                &request.authority,
                &[],
            )?,
        });
    }

    log::debug!(
        "{:?} for {} on mint {} (gating active: {}): {} instructions",
        request.action,
        request.wallet,
        mint.address,
        state.gating_active,
        instructions.len()
    );
    Ok(instructions)
}

/// Fetch the mint, the wallet's associated token account and the list, then
/// plan the update
pub async fn build_list_update<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    request: &ListUpdateRequest,
) -> Result<Vec<Instruction>> {
    let token_account_address = get_associated_token_address_with_program_id(
        &request.wallet,
        &request.mint,
        &config.token_program,
    );
    let list = async {
        match &request.list_config {
            Some(address) => fetch_list(ledger, config, address).await.map(Some),
            None => Ok(None),
        }
    };
    let (mint, token_account, list) = futures::try_join!(
        inspect_mint(ledger, config, &request.mint),
        fetch_token_account(ledger, config, &token_account_address),
        list,
    )?;
    plan_list_update(
        config,
        &mint,
        list.as_ref(),
        token_account.as_ref(),
        request,
    )
}

/// Instructions handing a freshly created mint's freeze authority to the
/// gating program and activating a new list of `mode` for it.
///
/// The mint authority must also be the mint's freeze authority and must pay,
/// so every instruction can be signed by one signer in one transaction.
pub fn gating_setup_instructions(
    config: &ProgramConfig,
    payer: &Capability,
    mint_authority: &Capability,
    mint: &Pubkey,
    mode: ListMode,
) -> Result<Vec<Instruction>> {
    if !payer.is_same_signer(mint_authority) {
        return Err(TokenTemplateError::GatingRequiresSameSigner);
    }
    let authority = mint_authority.pubkey();
    let mint_config = gate::get_mint_config_address(&config.gating_program, mint);
    let list_config = list::get_list_config_address(&config.list_program, &authority, mint);

    Ok(vec![
        gate::create_config(
            &config.gating_program,
            &authority,
            &authority,
            mint,
            &config.token_program,
        ),
        gate::set_gating_program(
            &config.gating_program,
            &authority,
            mint,
            &config.list_program,
        ),
        gate::toggle_permissionless_instructions(
            &config.gating_program,
            &authority,
            mint,
            true,
            true,
        ),
        list::create_list(&config.list_program, &authority, &authority, mint, mode),
        list::setup_extra_metas(
            &config.list_program,
            &authority,
            &authority,
            &mint_config,
            mint,
            &[list_config],
        ),
    ])
}
