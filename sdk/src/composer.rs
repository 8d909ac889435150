//! Mint composition: accumulate extensions, then emit the ordered creation
//! instructions

use {
    crate::{
        capability::Capability,
        config::ProgramConfig,
        extension::{ExtensionDescriptor, ExtensionKind, MetadataFields, OrderingClass},
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    solana_system_interface::instruction::create_account,
    solana_zk_sdk::encryption::pod::elgamal::PodElGamalPubkey,
    spl_token_2022::{
        extension::ExtensionType,
        instruction::initialize_mint2,
        state::{AccountState, Mint},
    },
    spl_token_metadata_interface::{
        instruction::{initialize as initialize_token_metadata, update_field},
        state::Field,
    },
    std::collections::HashSet,
};

/// Who pays for and who becomes the new mint
#[derive(Clone, Debug)]
pub struct CompositionContext {
    /// Fee payer, funds the mint account
    pub payer: Capability,
    /// The new mint account; must sign its own creation
    pub mint: Capability,
}

/// An immutable description of a mint to create.
///
/// Every `with_*` call consumes the composition and returns a new one, so a
/// partially built composition can be cloned and extended in different
/// directions without either affecting the other.
#[derive(Clone, Debug, Default)]
pub struct MintComposition {
    decimals: u8,
    mint_authority: Option<Capability>,
    freeze_authority: Option<Pubkey>,
    extensions: Vec<ExtensionDescriptor>,
}

impl MintComposition {
    /// Empty composition for a mint with `decimals`
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    /// Set the decimals
    pub fn with_decimals(self, decimals: u8) -> Self {
        Self { decimals, ..self }
    }

    /// Set the mint authority, the fee payer otherwise
    pub fn with_mint_authority(self, mint_authority: Capability) -> Self {
        Self {
            mint_authority: Some(mint_authority),
            ..self
        }
    }

    /// Set the freeze authority, the fee payer otherwise
    pub fn with_freeze_authority(self, freeze_authority: Pubkey) -> Self {
        Self {
            freeze_authority: Some(freeze_authority),
            ..self
        }
    }

    /// Append a descriptor
    pub fn with_extension(mut self, descriptor: ExtensionDescriptor) -> Self {
        self.extensions.push(descriptor);
        self
    }

    /// Metadata stored in the mint itself: a pointer to `mint` plus the
    /// metadata fields. `mint` must be the mint being created.
    ///
    /// The pointer authority is `fields.update_authority` as given, so `None`
    /// leaves the pointer fixed forever while the metadata's own update
    /// authority falls back to the mint authority at build time. Set
    /// `update_authority` to let one key manage both. Writing
    /// `additional_metadata` needs the update authority's signature, so with
    /// additional fields it must be the mint authority.
    pub fn with_metadata(self, mint: Pubkey, fields: MetadataFields) -> Self {
        self.with_extension(ExtensionDescriptor::MetadataPointer {
            authority: fields.update_authority,
            metadata_address: Some(mint),
        })
        .with_extension(ExtensionDescriptor::TokenMetadata(fields))
    }

    /// Permanent delegate
    pub fn with_permanent_delegate(self, delegate: Pubkey) -> Self {
        self.with_extension(ExtensionDescriptor::PermanentDelegate { delegate })
    }

    /// Pausable
    pub fn with_pausable(self, authority: Pubkey) -> Self {
        self.with_extension(ExtensionDescriptor::Pausable { authority })
    }

    /// New accounts start `Initialized` when `initialized` is true, `Frozen`
    /// otherwise
    pub fn with_default_account_state(self, initialized: bool) -> Self {
        let state = if initialized {
            AccountState::Initialized
        } else {
            AccountState::Frozen
        };
        self.with_extension(ExtensionDescriptor::DefaultAccountState { state })
    }

    /// Confidential balances
    pub fn with_confidential_balances(
        self,
        authority: Option<Pubkey>,
        auto_approve_new_accounts: bool,
        auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
    ) -> Self {
        self.with_extension(ExtensionDescriptor::ConfidentialBalances {
            authority,
            auto_approve_new_accounts,
            auditor_elgamal_pubkey,
        })
    }

    /// Scaled UI amount
    pub fn with_scaled_ui_amount(self, authority: Option<Pubkey>, multiplier: f64) -> Self {
        self.with_extension(ExtensionDescriptor::ScaledUiAmount {
            authority,
            multiplier,
        })
    }

    /// Transfer fee
    pub fn with_transfer_fee(
        self,
        transfer_fee_config_authority: Option<Pubkey>,
        withdraw_withheld_authority: Option<Pubkey>,
        transfer_fee_basis_points: u16,
        maximum_fee: u64,
    ) -> Self {
        self.with_extension(ExtensionDescriptor::TransferFee {
            transfer_fee_config_authority,
            withdraw_withheld_authority,
            transfer_fee_basis_points,
            maximum_fee,
        })
    }

    /// Interest bearing
    pub fn with_interest_bearing(self, rate_authority: Option<Pubkey>, rate: i16) -> Self {
        self.with_extension(ExtensionDescriptor::InterestBearing {
            rate_authority,
            rate,
        })
    }

    /// Non-transferable
    pub fn with_non_transferable(self) -> Self {
        self.with_extension(ExtensionDescriptor::NonTransferable)
    }

    /// Transfer hook
    pub fn with_transfer_hook(self, authority: Option<Pubkey>, program_id: Option<Pubkey>) -> Self {
        self.with_extension(ExtensionDescriptor::TransferHook {
            authority,
            program_id,
        })
    }

    /// Decimals of the mint
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Explicit mint authority, if set
    pub fn mint_authority(&self) -> Option<&Capability> {
        self.mint_authority.as_ref()
    }

    /// Explicit freeze authority, if set
    pub fn freeze_authority(&self) -> Option<Pubkey> {
        self.freeze_authority
    }

    /// Descriptors in the order they were added
    pub fn extensions(&self) -> &[ExtensionDescriptor] {
        &self.extensions
    }

    /// Kinds in the order they were added
    pub fn kinds(&self) -> Vec<ExtensionKind> {
        self.extensions.iter().map(|e| e.kind()).collect()
    }

    /// Mint authority, defaulting to the fee payer
    pub fn resolved_mint_authority(&self, ctx: &CompositionContext) -> Capability {
        self.mint_authority
            .clone()
            .unwrap_or_else(|| ctx.payer.clone())
    }

    /// Check every descriptor and reject duplicate kinds
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for descriptor in &self.extensions {
            descriptor.validate()?;
            if !seen.insert(descriptor.kind()) {
                return Err(TokenTemplateError::DuplicateExtension(descriptor.kind()));
            }
        }
        Ok(())
    }

    /// On-chain extension types allocated at creation time
    pub fn pre_init_extension_types(&self) -> Vec<ExtensionType> {
        self.extensions
            .iter()
            .filter(|e| e.ordering_class() != OrderingClass::PostInit)
            .map(|e| e.kind().extension_type())
            .collect()
    }

    /// Space allocated for the mint account.
    ///
    /// Post-init extensions are left out: the token program reallocates the
    /// account itself when they are written, and allocating them up front
    /// makes the mint initialization fail.
    pub fn account_len(&self) -> Result<usize> {
        Ok(ExtensionType::try_calculate_account_len::<Mint>(
            &self.pre_init_extension_types(),
        )?)
    }

    /// Size the account reaches once post-init extensions are written; the
    /// creation funds this size so the later reallocation stays rent exempt
    pub fn funded_len(&self, mint: &Pubkey) -> Result<usize> {
        let mut len = self.account_len()?;
        for descriptor in &self.extensions {
            if let ExtensionDescriptor::TokenMetadata(fields) = descriptor {
                len = len.saturating_add(fields.to_token_metadata(mint)?.tlv_size_of()?);
            }
        }
        Ok(len)
    }

    /// Emit the creation instructions, funding the account with `lamports`.
    ///
    /// Order: create account, pre-init extensions in insertion order, mint
    /// initialization, post-init extensions, extra metadata fields.
    pub fn build_instructions(
        &self,
        config: &ProgramConfig,
        ctx: &CompositionContext,
        lamports: u64,
    ) -> Result<Vec<Instruction>> {
        self.validate()?;

        let token_program_id = &config.token_program;
        let mint = ctx.mint.pubkey();
        let payer = ctx.payer.pubkey();
        let mint_authority = self.resolved_mint_authority(ctx);
        let freeze_authority = self.freeze_authority.unwrap_or(payer);

        let has_post_init = self
            .extensions
            .iter()
            .any(|e| e.ordering_class() == OrderingClass::PostInit);
        if has_post_init && !mint_authority.is_signer() {
            return Err(TokenTemplateError::MintAuthorityNotSigner);
        }
        self.check_metadata(&mint, &mint_authority.pubkey())?;

        let space = self.account_len()?;
        let mut instructions = vec![create_account(
            &payer,
            &mint,
            lamports,
            space as u64,
            token_program_id,
        )];

        for descriptor in &self.extensions {
            if let Some(instruction) = descriptor.pre_init_instruction(token_program_id, &mint)? {
                instructions.push(instruction);
            }
        }

        instructions.push(initialize_mint2(
            token_program_id,
            &mint,
            &mint_authority.pubkey(),
            Some(&freeze_authority),
            self.decimals,
        )?);

        for descriptor in &self.extensions {
            if let ExtensionDescriptor::TokenMetadata(fields) = descriptor {
                instructions.extend(metadata_instructions(
                    token_program_id,
                    &mint,
                    &mint_authority.pubkey(),
                    fields,
                ));
            }
        }

        log::debug!(
            "Composed mint {} ({} bytes, {} extensions) into {} instructions",
            mint,
            space,
            self.extensions.len(),
            instructions.len()
        );
        Ok(instructions)
    }

    /// Metadata in the mint must be pointed at by the mint, and additional
    /// fields must be signable by the mint authority
    fn check_metadata(&self, mint: &Pubkey, mint_authority: &Pubkey) -> Result<()> {
        let Some(fields) = self.extensions.iter().find_map(|e| match e {
            ExtensionDescriptor::TokenMetadata(fields) => Some(fields),
            _ => None,
        }) else {
            return Ok(());
        };
        let pointer = self.extensions.iter().find_map(|e| match e {
            ExtensionDescriptor::MetadataPointer {
                metadata_address, ..
            } => *metadata_address,
            _ => None,
        });
        if pointer != Some(*mint) {
            return Err(TokenTemplateError::MetadataPointerMismatch {
                expected: *mint,
                actual: pointer,
            });
        }
        match fields.update_authority {
            Some(authority)
                if authority != *mint_authority && !fields.additional_metadata.is_empty() =>
            {
                Err(TokenTemplateError::UpdateAuthorityNotSigner(authority))
            }
            _ => Ok(()),
        }
    }

    /// Same as [`Self::build_instructions`], funding from a local rent schedule
    pub fn build_instructions_with_rent(
        &self,
        config: &ProgramConfig,
        ctx: &CompositionContext,
        rent: &Rent,
    ) -> Result<Vec<Instruction>> {
        self.validate()?;
        let lamports = rent.minimum_balance(self.funded_len(&ctx.mint.pubkey())?);
        self.build_instructions(config, ctx, lamports)
    }

    /// Same as [`Self::build_instructions`], funding at the ledger's rent
    /// exempt minimum
    pub async fn build_instructions_with_ledger<L: LedgerReader + ?Sized>(
        &self,
        config: &ProgramConfig,
        ctx: &CompositionContext,
        ledger: &L,
    ) -> Result<Vec<Instruction>> {
        self.validate()?;
        let lamports = ledger
            .get_minimum_balance(self.funded_len(&ctx.mint.pubkey())?)
            .await?;
        self.build_instructions(config, ctx, lamports)
    }
}

/// Initialize the metadata stored in `mint`, then one update per additional
/// field in order. The update authority defaults to the mint authority.
fn metadata_instructions(
    token_program_id: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    fields: &MetadataFields,
) -> Vec<Instruction> {
    let update_authority = fields.update_authority.unwrap_or(*mint_authority);
    let mut instructions = vec![initialize_token_metadata(
        token_program_id,
        mint,
        &update_authority,
        mint,
        mint_authority,
        fields.name.clone(),
        fields.symbol.clone(),
        fields.uri.clone(),
    )];
    for (key, value) in &fields.additional_metadata {
        instructions.push(update_field(
            token_program_id,
            mint,
            &update_authority,
            Field::Key(key.clone()),
            value.clone(),
        ));
    }
    instructions
}
