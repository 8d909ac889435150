use {
    solana_account::Account,
    solana_instruction::Instruction,
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    spl_pod::primitives::PodU64,
    spl_token_templates::{
        access_control::list::{
            get_list_config_address, ListConfig, ListMode, LIST_CONFIG_DISCRIMINATOR,
        },
        composer::CompositionContext,
        Capability, ProgramConfig,
    },
};

pub const DEFAULT_MINT_DECIMALS: u8 = 6;
pub const DEFAULT_MINT_SUPPLY: u64 = 500_000_000;

#[derive(Clone, Debug)]
pub struct KeyedAccount {
    pub key: Pubkey,
    pub account: Account,
}

pub fn setup_logging() {
    solana_logger::setup();
}

/// Token-2022 with freshly generated gating and list program ids
pub fn test_config() -> ProgramConfig {
    ProgramConfig {
        token_program: spl_token_2022::id(),
        gating_program: Pubkey::new_unique(),
        list_program: Pubkey::new_unique(),
    }
}

pub fn signer() -> Capability {
    Capability::signer(Keypair::new())
}

/// Payer and mint both signers
pub fn composition_context() -> CompositionContext {
    CompositionContext {
        payer: signer(),
        mint: signer(),
    }
}

/// Context where `authority` pays
pub fn context_paid_by(authority: &Capability) -> CompositionContext {
    CompositionContext {
        payer: authority.clone(),
        mint: signer(),
    }
}

pub fn program_ids(instructions: &[Instruction]) -> Vec<Pubkey> {
    instructions.iter().map(|ix| ix.program_id).collect()
}

/// List config of `authority` seeded with `mint`, owned by the list program
pub fn list_account(
    config: &ProgramConfig,
    authority: &Pubkey,
    mint: &Pubkey,
    mode: ListMode,
) -> KeyedAccount {
    let state = ListConfig {
        discriminator: LIST_CONFIG_DISCRIMINATOR,
        mode: mode as u8,
        bump: 255,
        authority: *authority,
        seed: *mint,
        wallets_count: PodU64::from(0),
    };
    let data = bytemuck::bytes_of(&state).to_vec();
    KeyedAccount {
        key: get_list_config_address(&config.list_program, authority, mint),
        account: Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner: config.list_program,
            ..Account::default()
        },
    }
}
