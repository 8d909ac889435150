use {
    solana_pubkey::Pubkey,
    spl_pod::primitives::PodU64,
    spl_token_templates::access_control::{
        gate::{self, GatingInstruction},
        list::{self, ListConfig, ListInstruction, ListMode, LIST_CONFIG_DISCRIMINATOR},
    },
};

#[test]
fn test_pack_unpack_gating_instructions() {
    let instruction = GatingInstruction::CreateConfig;
    let packed = instruction.pack();
    assert_eq!(packed, vec![0]);
    assert_eq!(GatingInstruction::unpack(&packed).unwrap(), instruction);

    let gating_program = Pubkey::new_unique();
    let instruction = GatingInstruction::SetGatingProgram { gating_program };
    let packed = instruction.pack();
    let mut expected = vec![1];
    expected.extend_from_slice(gating_program.as_ref());
    assert_eq!(packed, expected);
    assert_eq!(GatingInstruction::unpack(&packed).unwrap(), instruction);

    let instruction = GatingInstruction::TogglePermissionlessInstructions {
        freeze_enabled: false,
        thaw_enabled: true,
    };
    let packed = instruction.pack();
    assert_eq!(packed, vec![2, 0, 1]);
    assert_eq!(GatingInstruction::unpack(&packed).unwrap(), instruction);

    assert_eq!(GatingInstruction::FreezePermissionless.pack(), vec![3]);
    assert_eq!(GatingInstruction::ThawPermissionless.pack(), vec![4]);
}

#[test]
fn test_unpack_invalid_gating_data() {
    assert!(GatingInstruction::unpack(&[]).is_err());
    assert!(GatingInstruction::unpack(&[0, 0]).is_err());
    assert!(GatingInstruction::unpack(&[1, 0, 0]).is_err());
    assert!(GatingInstruction::unpack(&[2, 1]).is_err());
    assert!(GatingInstruction::unpack(&[2, 1, 2]).is_err());
    assert!(GatingInstruction::unpack(&[5]).is_err());
}

#[test]
fn test_pack_unpack_list_instructions() {
    let seed = Pubkey::new_unique();
    let instruction = ListInstruction::CreateList {
        mode: ListMode::Block,
        seed,
    };
    let packed = instruction.pack();
    assert_eq!(packed.len(), 34);
    assert_eq!(packed[..2], [0, 1]);
    assert_eq!(packed[2..], seed.to_bytes());
    assert_eq!(ListInstruction::unpack(&packed).unwrap(), instruction);

    assert_eq!(ListInstruction::AddWallet.pack(), vec![1]);
    assert_eq!(ListInstruction::RemoveWallet.pack(), vec![2]);
    assert_eq!(ListInstruction::SetupExtraMetas.pack(), vec![3]);
    assert_eq!(
        ListInstruction::unpack(&[3]).unwrap(),
        ListInstruction::SetupExtraMetas
    );
}

#[test]
fn test_unpack_invalid_list_data() {
    assert!(ListInstruction::unpack(&[]).is_err());
    assert!(ListInstruction::unpack(&[0, 0]).is_err());
    let mut bad_mode = vec![0, 2];
    bad_mode.extend_from_slice(&[0; 32]);
    assert!(ListInstruction::unpack(&bad_mode).is_err());
    assert!(ListInstruction::unpack(&[1, 0]).is_err());
    assert!(ListInstruction::unpack(&[4]).is_err());
}

#[test]
fn test_permissionless_account_order() {
    let program_id = Pubkey::new_unique();
    let accounts = gate::PermissionlessAccounts {
        caller: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        token_account: Pubkey::new_unique(),
        token_account_owner: Pubkey::new_unique(),
        token_program_id: spl_token_2022::id(),
        gate_program_id: Pubkey::new_unique(),
        extra_metas: Pubkey::new_unique(),
        resolved: vec![solana_instruction::AccountMeta::new_readonly(
            Pubkey::new_unique(),
            false,
        )],
    };
    let instruction = gate::thaw_permissionless(&program_id, &accounts);

    assert_eq!(instruction.program_id, program_id);
    assert_eq!(instruction.data, vec![4]);
    let keys: Vec<Pubkey> = instruction.accounts.iter().map(|m| m.pubkey).collect();
    assert_eq!(
        keys,
        vec![
            accounts.caller,
            accounts.mint,
            accounts.token_account,
            accounts.token_account_owner,
            gate::get_mint_config_address(&program_id, &accounts.mint),
            accounts.token_program_id,
            accounts.gate_program_id,
            accounts.extra_metas,
            accounts.resolved[0].pubkey,
        ]
    );
    assert!(instruction.accounts[0].is_signer);
    assert!(instruction.accounts[2].is_writable);
    assert!(!instruction.accounts[1].is_writable);
}

#[test]
fn test_list_config_unpack() {
    let authority = Pubkey::new_unique();
    let seed = Pubkey::new_unique();
    let config = ListConfig {
        discriminator: LIST_CONFIG_DISCRIMINATOR,
        mode: ListMode::Allow as u8,
        bump: 255,
        authority,
        seed,
        wallets_count: PodU64::from(3),
    };
    let data = bytemuck::bytes_of(&config).to_vec();
    let unpacked = ListConfig::unpack(&data).unwrap();
    assert_eq!(unpacked.list_mode(), Some(ListMode::Allow));
    assert_eq!(unpacked.authority, authority);

    let mut wrong_discriminator = data.clone();
    wrong_discriminator[0] = 0;
    assert!(ListConfig::unpack(&wrong_discriminator).is_err());
    assert!(ListConfig::unpack(&data[..10]).is_err());

    let mut unknown_mode = data;
    unknown_mode[1] = 9;
    assert_eq!(ListConfig::unpack(&unknown_mode).unwrap().list_mode(), None);
}

#[test]
fn test_create_list_targets_derived_config() {
    let program_id = Pubkey::new_unique();
    let authority = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let instruction = list::create_list(&program_id, &authority, &authority, &mint, ListMode::Allow);
    assert_eq!(
        instruction.accounts[2].pubkey,
        list::get_list_config_address(&program_id, &authority, &mint)
    );
}
