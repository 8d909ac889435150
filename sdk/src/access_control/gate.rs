//! Gating program interface
//!
//! The gating program holds a mint's freeze authority through a per-mint
//! config account and lets anyone freeze or thaw token accounts, provided the
//! program configured as its gate (the list program) approves the operation.

use {
    solana_instruction::{AccountMeta, Instruction},
    solana_program_error::ProgramError,
    solana_pubkey::Pubkey,
    std::convert::TryInto,
};

const MINT_CONFIG_SEED: &[u8] = br"MINT_CFG";

/// Derive the per-mint config account of the gating program. Once gating is
/// set up this address is the mint's freeze authority.
pub fn get_mint_config_address(program_id: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[MINT_CONFIG_SEED, mint.as_ref()], program_id).0
}

/// Instructions supported by the gating program
#[derive(Clone, Debug, PartialEq)]
#[repr(u8)]
pub enum GatingInstruction {
    /// Create the mint config and hand it the mint's freeze authority
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s, w]` Payer
    /// 1. `[s]` Current freeze authority of the mint
    /// 2. `[w]` Mint
    /// 3. `[w]` Mint config, address must be: `get_mint_config_address(mint)`
    /// 4. `[]` System program
    /// 5. `[]` Token program
    CreateConfig,

    /// Set the program consulted on permissionless freeze and thaw
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` Freeze authority recorded in the mint config
    /// 1. `[w]` Mint config
    SetGatingProgram {
        /// Program consulted on permissionless operations
        gating_program: Pubkey,
    },

    /// Enable or disable permissionless freeze and thaw
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` Freeze authority recorded in the mint config
    /// 1. `[w]` Mint config
    TogglePermissionlessInstructions {
        /// Anyone may freeze accounts the gate rejects
        freeze_enabled: bool,
        /// Anyone may thaw accounts the gate approves
        thaw_enabled: bool,
    },

    /// Freeze a token account, validated by the gate
    ///
    /// Accounts expected by this instruction:
    ///
    /// 0. `[s]` Caller, any signer
    /// 1. `[]` Mint
    /// 2. `[w]` Token account
    /// 3. `[]` Token account owner
    /// 4. `[]` Mint config
    /// 5. `[]` Token program
    /// 6. `[]` Gate program
    /// 7. `[]` Gate's extra metas account for freeze
    /// 8. `..8+M` `[]` M extra accounts resolved from the extra metas
    FreezePermissionless,

    /// Thaw a token account, validated by the gate. Same accounts as
    /// `FreezePermissionless`, with the gate's extra metas account for thaw.
    ThawPermissionless,
}

impl GatingInstruction {
    /// Packs a [`GatingInstruction`](enum.GatingInstruction.html) into a byte
    /// array.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        match self {
            GatingInstruction::CreateConfig => buf.push(0),
            GatingInstruction::SetGatingProgram { gating_program } => {
                buf.push(1);
                buf.extend_from_slice(gating_program.as_ref());
            }
            GatingInstruction::TogglePermissionlessInstructions {
                freeze_enabled,
                thaw_enabled,
            } => {
                buf.push(2);
                buf.push(u8::from(*freeze_enabled));
                buf.push(u8::from(*thaw_enabled));
            }
            GatingInstruction::FreezePermissionless => buf.push(3),
            GatingInstruction::ThawPermissionless => buf.push(4),
        }
        buf
    }

    /// Unpacks a byte array into a
    /// [`GatingInstruction`](enum.GatingInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let unpack_bool = |byte: u8| match byte {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ProgramError::InvalidInstructionData),
        };
        match input.split_first() {
            Some((&0, [])) => Ok(GatingInstruction::CreateConfig),
            Some((&1, rest)) if rest.len() == 32 => {
                let gating_program: [u8; 32] = rest
                    .try_into()
                    .map_err(|_| ProgramError::InvalidInstructionData)?;
                Ok(GatingInstruction::SetGatingProgram {
                    gating_program: Pubkey::new_from_array(gating_program),
                })
            }
            Some((&2, &[freeze, thaw])) => Ok(GatingInstruction::TogglePermissionlessInstructions {
                freeze_enabled: unpack_bool(freeze)?,
                thaw_enabled: unpack_bool(thaw)?,
            }),
            Some((&3, [])) => Ok(GatingInstruction::FreezePermissionless),
            Some((&4, [])) => Ok(GatingInstruction::ThawPermissionless),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Creates `CreateConfig` instruction.
pub fn create_config(
    program_id: &Pubkey,
    payer: &Pubkey,
    freeze_authority: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(*freeze_authority, true),
        AccountMeta::new(*mint, false),
        AccountMeta::new(get_mint_config_address(program_id, mint), false),
        AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        AccountMeta::new_readonly(*token_program_id, false),
    ];
    let data = GatingInstruction::CreateConfig.pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `SetGatingProgram` instruction.
pub fn set_gating_program(
    program_id: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    gating_program: &Pubkey,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(get_mint_config_address(program_id, mint), false),
    ];
    let data = GatingInstruction::SetGatingProgram {
        gating_program: *gating_program,
    }
    .pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Creates `TogglePermissionlessInstructions` instruction.
pub fn toggle_permissionless_instructions(
    program_id: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    freeze_enabled: bool,
    thaw_enabled: bool,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(get_mint_config_address(program_id, mint), false),
    ];
    let data = GatingInstruction::TogglePermissionlessInstructions {
        freeze_enabled,
        thaw_enabled,
    }
    .pack();
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

/// Accounts shared by permissionless freeze and thaw
#[derive(Clone, Debug, PartialEq)]
pub struct PermissionlessAccounts {
    /// Any signer
    pub caller: Pubkey,
    /// Mint of the token account
    pub mint: Pubkey,
    /// Token account to freeze or thaw
    pub token_account: Pubkey,
    /// Owner of the token account
    pub token_account_owner: Pubkey,
    /// Token program
    pub token_program_id: Pubkey,
    /// Gate program consulted by the gating program
    pub gate_program_id: Pubkey,
    /// Gate's extra metas account for the operation
    pub extra_metas: Pubkey,
    /// Extra accounts resolved from the extra metas
    pub resolved: Vec<AccountMeta>,
}

fn permissionless(
    program_id: &Pubkey,
    instruction: GatingInstruction,
    accounts: &PermissionlessAccounts,
) -> Instruction {
    let mut metas = vec![
        AccountMeta::new_readonly(accounts.caller, true),
        AccountMeta::new_readonly(accounts.mint, false),
        AccountMeta::new(accounts.token_account, false),
        AccountMeta::new_readonly(accounts.token_account_owner, false),
        AccountMeta::new_readonly(get_mint_config_address(program_id, &accounts.mint), false),
        AccountMeta::new_readonly(accounts.token_program_id, false),
        AccountMeta::new_readonly(accounts.gate_program_id, false),
        AccountMeta::new_readonly(accounts.extra_metas, false),
    ];
    metas.extend(accounts.resolved.iter().cloned());
    Instruction::new_with_bytes(*program_id, &instruction.pack(), metas)
}

/// Creates `FreezePermissionless` instruction.
pub fn freeze_permissionless(program_id: &Pubkey, accounts: &PermissionlessAccounts) -> Instruction {
    permissionless(program_id, GatingInstruction::FreezePermissionless, accounts)
}

/// Creates `ThawPermissionless` instruction.
pub fn thaw_permissionless(program_id: &Pubkey, accounts: &PermissionlessAccounts) -> Instruction {
    permissionless(program_id, GatingInstruction::ThawPermissionless, accounts)
}
