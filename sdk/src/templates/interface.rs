use {
    crate::{
        access_control::{list::ListMode, operations::gating_setup_instructions},
        capability::Capability,
        composer::{CompositionContext, MintComposition},
        config::ProgramConfig,
        extension::MetadataFields,
        ledger::LedgerReader,
        Result, TokenTemplateError,
    },
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
};

/// The interface of a canned mint configuration.
pub trait TokenTemplate {
    /// Extensions and authorities of the new mint
    fn composition(&self, ctx: &CompositionContext) -> MintComposition;

    /// Mode of the list activated for the mint, `None` to leave gating out
    fn gating(&self) -> Option<ListMode>;

    /// Creation instructions, funded from a local rent schedule, followed by
    /// the gating setup when it can be signed in the same transaction
    fn build_instructions(
        &self,
        config: &ProgramConfig,
        ctx: &CompositionContext,
        rent: &Rent,
    ) -> Result<Vec<Instruction>> {
        let composition = self.composition(ctx);
        let instructions = composition.build_instructions_with_rent(config, ctx, rent)?;
        append_gating_setup(config, ctx, &composition, self.gating(), instructions)
    }
}

/// [`TokenTemplate::build_instructions`] funded at the ledger's rent exempt
/// minimum
pub async fn build_template_instructions<T, L>(
    template: &T,
    config: &ProgramConfig,
    ctx: &CompositionContext,
    ledger: &L,
) -> Result<Vec<Instruction>>
where
    T: TokenTemplate + ?Sized,
    L: LedgerReader + ?Sized,
{
    let composition = template.composition(ctx);
    let instructions = composition
        .build_instructions_with_ledger(config, ctx, ledger)
        .await?;
    append_gating_setup(config, ctx, &composition, template.gating(), instructions)
}

/// Append the gating setup for `mode`.
///
/// The setup is signed by the mint authority, which must also pay and hold
/// the freeze authority. Otherwise the setup is skipped and has to be done in
/// a separate transaction.
fn append_gating_setup(
    config: &ProgramConfig,
    ctx: &CompositionContext,
    composition: &MintComposition,
    mode: Option<ListMode>,
    mut instructions: Vec<Instruction>,
) -> Result<Vec<Instruction>> {
    let Some(mode) = mode else {
        return Ok(instructions);
    };
    let mint = ctx.mint.pubkey();
    let mint_authority = composition.resolved_mint_authority(ctx);
    let freeze_authority = composition
        .freeze_authority()
        .unwrap_or_else(|| ctx.payer.pubkey());
    if freeze_authority != mint_authority.pubkey() {
        log::warn!(
            "Skipping gating setup for {}: freeze authority {} is not the mint authority",
            mint,
            freeze_authority
        );
        return Ok(instructions);
    }
    match gating_setup_instructions(config, &ctx.payer, &mint_authority, &mint, mode) {
        Ok(setup) => instructions.extend(setup),
        Err(TokenTemplateError::GatingRequiresSameSigner) => log::warn!(
            "Skipping gating setup for {}: fee payer {} is not the mint authority signer",
            mint,
            ctx.payer.pubkey()
        ),
        Err(e) => return Err(e),
    }
    Ok(instructions)
}

/// Parameters shared by the regulated templates
#[derive(Clone, Debug, Default)]
pub struct TemplateParams {
    /// Decimals
    pub decimals: u8,
    /// Metadata; its update authority defaults to the mint authority
    pub metadata: MetadataFields,
    /// Mint authority, the fee payer if `None`
    pub mint_authority: Option<Capability>,
    /// Freeze authority, the mint authority if `None`
    pub freeze_authority: Option<Pubkey>,
    /// Permanent delegate, the mint authority if `None`
    pub permanent_delegate: Option<Pubkey>,
    /// Pause authority, the mint authority if `None`
    pub pause_authority: Option<Pubkey>,
    /// `Allow`: new accounts start frozen; `Block`: they start initialized
    pub list_mode: ListMode,
    /// Hand the freeze authority to the gating program with a new list of
    /// `list_mode`
    pub enable_gating: bool,
}

impl TemplateParams {
    /// Metadata, pausable, permanent delegate and default account state.
    ///
    /// With gating enabled new accounts always start frozen; the list decides
    /// who gets thawed.
    pub fn base_composition(&self, ctx: &CompositionContext) -> MintComposition {
        let mint_authority = self
            .mint_authority
            .clone()
            .unwrap_or_else(|| ctx.payer.clone());
        let authority = mint_authority.pubkey();
        let mut metadata = self.metadata.clone();
        metadata.update_authority.get_or_insert(authority);
        let initialized = self.list_mode == ListMode::Block && !self.enable_gating;

        MintComposition::new(self.decimals)
            .with_mint_authority(mint_authority)
            .with_freeze_authority(self.freeze_authority.unwrap_or(authority))
            .with_metadata(ctx.mint.pubkey(), metadata)
            .with_pausable(self.pause_authority.unwrap_or(authority))
            .with_permanent_delegate(self.permanent_delegate.unwrap_or(authority))
            .with_default_account_state(initialized)
    }

    /// List mode to set up, if gating is enabled
    pub fn gating(&self) -> Option<ListMode> {
        self.enable_gating.then_some(self.list_mode)
    }
}
