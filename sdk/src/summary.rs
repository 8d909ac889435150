//! Flattened mint summary for display

use {
    crate::{
        access_control::state::AccessControlState,
        classifier::{detect_archetypes, Archetype},
        config::ProgramConfig,
        inspector::{inspect_mint, MintAccountView, MintAuthorities},
        ledger::LedgerReader,
        Result,
    },
    serde_derive::Serialize,
    serde_with::{serde_as, DisplayFromStr},
    solana_pubkey::Pubkey,
    std::fmt,
};

/// Everything a dashboard shows about a mint
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintSummary {
    /// Mint address
    #[serde_as(as = "DisplayFromStr")]
    pub address: Pubkey,
    /// Decimals
    pub decimals: u8,
    /// Raw supply
    #[serde_as(as = "DisplayFromStr")]
    pub supply: u64,
    /// Matched archetypes
    pub archetypes: Vec<Archetype>,
    /// Names of the catalog extensions
    pub extensions: Vec<String>,
    /// Names of extensions outside the catalog
    pub other_extensions: Vec<String>,
    /// Flattened authorities
    pub authorities: MintAuthorities,
    /// Access-control state
    pub access_control: AccessControlState,
    /// Paused flag of the pausable extension
    pub paused: bool,
}

impl MintSummary {
    /// Summarize an inspected mint
    pub fn new(mint: &MintAccountView, config: &ProgramConfig) -> Self {
        Self {
            address: mint.address,
            decimals: mint.decimals,
            supply: mint.supply,
            archetypes: detect_archetypes(mint.kinds()),
            extensions: mint.kinds().iter().map(|k| k.name().to_string()).collect(),
            other_extensions: mint
                .other_extensions
                .iter()
                .map(|t| format!("{t:?}"))
                .collect(),
            authorities: mint.authorities.clone(),
            access_control: AccessControlState::from_mint(mint, config),
            paused: mint.paused,
        }
    }
}

/// Fetch, inspect and summarize a mint
pub async fn summarize_mint<L: LedgerReader + ?Sized>(
    ledger: &L,
    config: &ProgramConfig,
    mint: &Pubkey,
) -> Result<MintSummary> {
    let view = inspect_mint(ledger, config, mint).await?;
    Ok(MintSummary::new(&view, config))
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_authority(f: &mut fmt::Formatter<'_>, label: &str, value: &Option<Pubkey>) -> fmt::Result {
    match value {
        Some(authority) => writeln!(f, "  {label}: {authority}"),
        None => Ok(()),
    }
}

impl fmt::Display for MintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mint: {}", self.address)?;
        writeln!(f, "Decimals: {}", self.decimals)?;
        writeln!(f, "Supply: {}", self.supply)?;
        writeln!(f, "Archetypes: {}", join(&self.archetypes))?;
        writeln!(f, "Extensions: {}", self.extensions.join(", "))?;
        if !self.other_extensions.is_empty() {
            writeln!(f, "Other extensions: {}", self.other_extensions.join(", "))?;
        }
        if self.paused {
            writeln!(f, "Paused: yes")?;
        }
        match self.access_control.mode {
            Some(mode) => writeln!(
                f,
                "Access control: {} list, gating {}",
                mode,
                if self.access_control.gating_active {
                    "active"
                } else {
                    "inactive"
                }
            )?,
            None => writeln!(f, "Access control: none")?,
        }

        writeln!(f, "Authorities:")?;
        let a = &self.authorities;
        fmt_authority(f, "mint", &a.mint_authority)?;
        fmt_authority(f, "freeze", &a.freeze_authority)?;
        fmt_authority(f, "metadata", &a.metadata_authority)?;
        fmt_authority(f, "metadata pointer", &a.metadata_pointer_authority)?;
        fmt_authority(f, "pause", &a.pausable_authority)?;
        fmt_authority(f, "permanent delegate", &a.permanent_delegate)?;
        fmt_authority(f, "confidential balances", &a.confidential_balances_authority)?;
        fmt_authority(f, "scaled ui amount", &a.scaled_ui_amount_authority)?;
        fmt_authority(f, "transfer fee config", &a.transfer_fee_config_authority)?;
        fmt_authority(f, "withdraw withheld", &a.withdraw_withheld_authority)?;
        fmt_authority(f, "interest rate", &a.interest_rate_authority)?;
        fmt_authority(f, "transfer hook", &a.transfer_hook_authority)
    }
}
