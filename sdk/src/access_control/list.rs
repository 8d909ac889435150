//! Allow/block list program interface

use {
    bytemuck::{Pod, Zeroable},
    num_derive::FromPrimitive,
    num_traits::FromPrimitive,
    serde_derive::Serialize,
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    spl_pod::primitives::PodU64,
    std::{convert::TryInto, fmt},
};

/// Semantics of a list
#[derive(Clone, Copy, Debug, Default, Eq, FromPrimitive, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ListMode {
    /// Members may hold unfrozen accounts, everyone else stays frozen
    #[default]
    Allow = 0,
    /// Members are frozen, everyone else may transact
    Block = 1,
}

impl fmt::Display for ListMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListMode::Allow => f.write_str("allow"),
            ListMode::Block => f.write_str("block"),
        }
    }
}

const LIST_CONFIG_SEED: &[u8] = br"list_config";
const WALLET_ENTRY_SEED: &[u8] = br"wallet_entry";
const THAW_EXTRA_METAS_SEED: &[u8] = br"thaw-extra-account-metas";
const FREEZE_EXTRA_METAS_SEED: &[u8] = br"freeze-extra-account-metas";

/// First byte of an initialized list config account
pub const LIST_CONFIG_DISCRIMINATOR: u8 = 1;

/// List config
///
/// Holds the list's mode tag; membership is recorded in one wallet entry
/// account per member at `get_wallet_entry_address(list_config, wallet)`.
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ListConfig {
    /// Always `LIST_CONFIG_DISCRIMINATOR`
    pub discriminator: u8,
    /// `ListMode` as a byte
    pub mode: u8,
    /// Bump seed of the config address
    pub bump: u8,
    /// Authority allowed to add and remove members
    pub authority: Pubkey,
    /// Seed the config address was derived with
    pub seed: Pubkey,
    /// Number of members
    pub wallets_count: PodU64,
}

impl ListConfig {
    /// Size of the account data
    pub const LEN: usize = std::mem::size_of::<ListConfig>();

    /// Read a config out of account data
    pub fn unpack(data: &[u8]) -> Result<&Self, ProgramError> {
        let config = data
            .get(..Self::LEN)
            .and_then(|bytes| bytemuck::try_from_bytes::<ListConfig>(bytes).ok())
            .ok_or(ProgramError::InvalidAccountData)?;
        if config.discriminator != LIST_CONFIG_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(config)
    }

    /// Mode tag, `None` if the byte is not a known mode
    pub fn list_mode(&self) -> Option<ListMode> {
        ListMode::from_u8(self.mode)
    }
}

/// Derive the list config address for an authority and seed
pub fn get_list_config_address(program_id: &Pubkey, authority: &Pubkey, seed: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[LIST_CONFIG_SEED, authority.as_ref(), seed.as_ref()],
        program_id,
    )
    .0
}

/// Derive the membership record of `wallet` in `list_config`
pub fn get_wallet_entry_address(
    program_id: &Pubkey,
    list_config: &Pubkey,
    wallet: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[WALLET_ENTRY_SEED, list_config.as_ref(), wallet.as_ref()],
        program_id,
    )
    .0
}

/// Derive the account listing the extra accounts a permissionless thaw of
/// `mint` needs
pub fn get_thaw_extra_metas_address(program_id: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[THAW_EXTRA_METAS_SEED, mint.as_ref()], program_id).0
}

/// Derive the account listing the extra accounts a permissionless freeze of
/// `mint` needs
pub fn get_freeze_extra_metas_address(program_id: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[FREEZE_EXTRA_METAS_SEED, mint.as_ref()], program_id).0
}

/// Instructions supported by the list program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum ListInstruction {
    /// Create a list
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` List authority
    /// 1. `[s, w]` Payer
    /// 2. `[w]` List config, address must be:
    ///    `get_list_config_address(authority, seed)`
    /// 3. `[]` System program
    CreateList {
        /// Semantics of the list
        mode: ListMode,
        /// Seed of the list config address
        seed: Pubkey,
    },

    /// Add a wallet to a list
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` List authority
    /// 1. `[s, w]` Payer
    /// 2. `[w]` List config
    /// 3. `[]` Wallet
    /// 4. `[w]` Wallet entry, address must be:
    ///    `get_wallet_entry_address(list_config, wallet)`
    /// 5. `[]` System program
    AddWallet,

    /// Remove a wallet from a list, returning the entry's rent to the
    /// authority
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s, w]` List authority
    /// 1. `[w]` List config
    /// 2. `[w]` Wallet entry
    RemoveWallet,

    /// Record the lists consulted by permissionless freeze and thaw of a mint
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` Mint freeze authority as recorded in the gating mint config
    /// 1. `[s, w]` Payer
    /// 2. `[]` Gating mint config
    /// 3. `[]` Mint
    /// 4. `[w]` Thaw extra metas, `get_thaw_extra_metas_address(mint)`
    /// 5. `[w]` Freeze extra metas, `get_freeze_extra_metas_address(mint)`
    /// 6. `[]` System program
    /// 7. `..7+N` `[]` N list configs
    SetupExtraMetas,
}

impl ListInstruction {
    /// Packs a [`ListInstruction`](enum.ListInstruction.html) into a byte
    /// array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            ListInstruction::CreateList { mode, seed } => {
                buf.push(0);
                buf.push(*mode as u8);
                buf.extend_from_slice(seed.as_ref());
            }
            ListInstruction::AddWallet => buf.push(1),
            ListInstruction::RemoveWallet => buf.push(2),
            ListInstruction::SetupExtraMetas => buf.push(3),
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`ListInstruction`](enum.ListInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            Some((&0, rest)) if rest.len() == 33 => {
                let mode = ListMode::from_u8(rest[0]).ok_or(ProgramError::InvalidInstructionData)?;
                let seed: [u8; 32] = rest[1..]
                    .try_into()
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(ListInstruction::CreateList {
                    mode,
                    seed: Pubkey::new_from_array(seed),
                })
            }
            Some((&1, [])) => Ok(ListInstruction::AddWallet),
            Some((&2, [])) => Ok(ListInstruction::RemoveWallet),
            Some((&3, [])) => Ok(ListInstruction::SetupExtraMetas),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Creates `CreateList` instruction.
pub fn create_list(
    program_id: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
    seed: &Pubkey,
    mode: ListMode,
) -> Instruction {
    let list_config = get_list_config_address(program_id, authority, seed);
    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new(list_config, false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
    ];
    let data = ListInstruction::CreateList { mode, seed: *seed }.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `AddWallet` instruction.
pub fn add_wallet(
    program_id: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
    list_config: &Pubkey,
    wallet: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new(*list_config, false),
        AccountMeta::new_readonly(*wallet, false),
        AccountMeta::new(
            get_wallet_entry_address(program_id, list_config, wallet),
            false,
        ),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
    ];
    let data = ListInstruction::AddWallet.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `RemoveWallet` instruction.
pub fn remove_wallet(
    program_id: &Pubkey,
    authority: &Pubkey,
    list_config: &Pubkey,
    wallet: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new(*list_config, false),
        AccountMeta::new(
            get_wallet_entry_address(program_id, list_config, wallet),
            false,
        ),
    ];
    let data = ListInstruction::RemoveWallet.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `SetupExtraMetas` instruction.
pub fn setup_extra_metas(
    program_id: &Pubkey,
    authority: &Pubkey,
    payer: &Pubkey,
    gating_mint_config: &Pubkey,
    mint: &Pubkey,
    list_configs: &[Pubkey],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*gating_mint_config, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(get_thaw_extra_metas_address(program_id, mint), false),
        AccountMeta::new(get_freeze_extra_metas_address(program_id, mint), false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
    ];
    for list_config in list_configs {
        accounts.push(AccountMeta::new_readonly(*list_config, false));
    }
    let data = ListInstruction::SetupExtraMetas.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}
