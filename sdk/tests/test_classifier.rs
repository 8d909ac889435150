mod helpers;

use {
    helpers::{
        common::{setup_logging, test_config},
        ledger::FakeLedger,
        mint_builder::MintBuilder,
    },
    solana_pubkey::Pubkey,
    spl_token_templates::{
        detect_archetypes, extension::MetadataFields, summary::summarize_mint, Archetype,
        ExtensionKind, MintComposition,
    },
};

const METADATA: ExtensionKind = ExtensionKind::TokenMetadata;
const DELEGATE: ExtensionKind = ExtensionKind::PermanentDelegate;
const DEFAULT_STATE: ExtensionKind = ExtensionKind::DefaultAccountState;
const CONFIDENTIAL: ExtensionKind = ExtensionKind::ConfidentialBalances;
const SCALED: ExtensionKind = ExtensionKind::ScaledUiAmount;

#[test]
fn test_closed_loop_only() {
    assert_eq!(
        detect_archetypes([METADATA, DELEGATE, DEFAULT_STATE]),
        vec![Archetype::ClosedLoop]
    );
}

#[test]
fn test_confidential_balances_reclassify_to_restricted_transfer() {
    assert_eq!(
        detect_archetypes([METADATA, DELEGATE, DEFAULT_STATE, CONFIDENTIAL]),
        vec![Archetype::RestrictedTransfer]
    );
}

#[test]
fn test_scaled_amount_adds_scaled_security() {
    assert_eq!(
        detect_archetypes([METADATA, DELEGATE, DEFAULT_STATE, SCALED]),
        vec![Archetype::ClosedLoop, Archetype::ScaledSecurity]
    );
    assert_eq!(
        detect_archetypes([METADATA, DELEGATE, DEFAULT_STATE, SCALED, CONFIDENTIAL]),
        vec![Archetype::RestrictedTransfer, Archetype::ScaledSecurity]
    );
}

#[test]
fn test_missing_requirement_is_unknown() {
    assert_eq!(
        detect_archetypes([METADATA, DELEGATE, SCALED, CONFIDENTIAL]),
        vec![Archetype::Unknown]
    );
    assert_eq!(
        detect_archetypes([ExtensionKind::TransferFee]),
        vec![Archetype::Unknown]
    );
}

#[test]
fn test_classification_ignores_order() {
    let kinds = [
        METADATA,
        ExtensionKind::MetadataPointer,
        DELEGATE,
        ExtensionKind::Pausable,
        DEFAULT_STATE,
        SCALED,
    ];
    let expected = detect_archetypes(kinds);
    for rotation in 0..kinds.len() {
        let mut rotated = kinds;
        rotated.rotate_left(rotation);
        assert_eq!(detect_archetypes(rotated), expected);
        rotated.reverse();
        assert_eq!(detect_archetypes(rotated), expected);
    }
}

#[test]
fn test_archetype_names() {
    assert_eq!(Archetype::RestrictedTransfer.to_string(), "restricted-transfer");
    assert_eq!(Archetype::ClosedLoop.to_string(), "closed-loop");
    assert_eq!(Archetype::ScaledSecurity.to_string(), "scaled-security");
    assert_eq!(Archetype::Unknown.to_string(), "unknown");
}

#[tokio::test]
async fn test_summary_of_inspected_mint() {
    setup_logging();
    let config = test_config();
    let mint = Pubkey::new_unique();
    let authority = Pubkey::new_unique();
    let composition = MintComposition::new(2)
        .with_metadata(
            mint,
            MetadataFields {
                update_authority: Some(authority),
                name: "Fund Share".to_string(),
                symbol: "FND".to_string(),
                uri: String::new(),
                additional_metadata: vec![],
            },
        )
        .with_permanent_delegate(authority)
        .with_default_account_state(true)
        .with_scaled_ui_amount(Some(authority), 1.0);
    let account = MintBuilder::from_composition(mint, &composition)
        .mint_authority(authority)
        .build();
    let ledger = FakeLedger::new().with_account(&account);

    let summary = summarize_mint(&ledger, &config, &mint).await.unwrap();
    assert_eq!(
        summary.archetypes,
        vec![Archetype::ClosedLoop, Archetype::ScaledSecurity]
    );
    assert_eq!(
        summary.extensions,
        vec![
            "metadata-pointer",
            "metadata",
            "permanent-delegate",
            "default-account-state",
            "scaled-ui-amount",
        ]
    );
    assert!(!summary.access_control.gating_active);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["address"], mint.to_string());
    assert_eq!(json["archetypes"][1], "scaled-security");
    assert_eq!(json["accessControl"]["mode"], "block");
    assert_eq!(json["authorities"]["permanentDelegate"], authority.to_string());

    let text = summary.to_string();
    assert!(text.contains("Archetypes: closed-loop, scaled-security"));
    assert!(text.contains(&format!("permanent delegate: {authority}")));
}
