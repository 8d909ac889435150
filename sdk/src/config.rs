//! Program deployment configuration

use {
    crate::{Result, TokenTemplateError},
    serde_derive::{Deserialize, Serialize},
    serde_with::{serde_as, DisplayFromStr},
    solana_pubkey::Pubkey,
};

/// Canonical deployment of the gating (token ACL) program
pub const DEFAULT_GATING_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("TACLkU6CiCdkQN2MjoyDkVg2yAH9zkxiHDsiztQ52TP");

/// Canonical deployment of the allow/block list program
pub const DEFAULT_LIST_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("GATEzzqxhJnsWF6vHRsgtixxSB8PaQdcqGEVTEHWiULz");

/// Addresses of the programs every builder targets.
///
/// Builders never embed program ids; pass a config pointing at fakes in tests
/// or at a different cluster's deployments.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramConfig {
    /// Extensible token program owning every mint
    #[serde_as(as = "DisplayFromStr")]
    pub token_program: Pubkey,
    /// Program that takes over the freeze authority to offer permissionless
    /// freeze and thaw
    #[serde_as(as = "DisplayFromStr")]
    pub gating_program: Pubkey,
    /// Program holding allow and block lists
    #[serde_as(as = "DisplayFromStr")]
    pub list_program: Pubkey,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            token_program: spl_token_2022::id(),
            gating_program: DEFAULT_GATING_PROGRAM_ID,
            list_program: DEFAULT_LIST_PROGRAM_ID,
        }
    }
}

impl ProgramConfig {
    /// Parse a config from its JSON form, e.g.
    /// `{"tokenProgram": "...", "gatingProgram": "...", "listProgram": "..."}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TokenTemplateError::InvalidConfig(e.to_string()))
    }
}
