use {
    crate::{
        access_control::{gate::get_mint_config_address, list::ListMode},
        config::ProgramConfig,
        inspector::MintAccountView,
    },
    serde_derive::Serialize,
    spl_token_2022::state::AccountState,
};

/// Access-control state of a mint, derived from its default account state and
/// freeze authority. Never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlState {
    /// `Allow` when new accounts start frozen, `Block` when they start
    /// initialized, `None` without a default account state
    pub mode: Option<ListMode>,
    /// The gating program holds the freeze authority and new accounts start
    /// frozen, so anyone may thaw accounts the list approves
    pub gating_active: bool,
}

impl AccessControlState {
    /// Derive the state of `mint`
    pub fn from_mint(mint: &MintAccountView, config: &ProgramConfig) -> Self {
        let default_state = mint.default_account_state();
        let mode = match default_state {
            Some(AccountState::Frozen) => Some(ListMode::Allow),
            Some(AccountState::Initialized) => Some(ListMode::Block),
            _ => None,
        };
        let mint_config = get_mint_config_address(&config.gating_program, &mint.address);
        let gating_active = mint.freeze_authority == Some(mint_config)
            && default_state == Some(AccountState::Frozen);
        log::trace!(
            "Access control of {}: mode {:?}, gating active {}",
            mint.address,
            mode,
            gating_active
        );
        Self {
            mode,
            gating_active,
        }
    }
}
