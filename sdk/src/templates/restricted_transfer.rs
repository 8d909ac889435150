use {
    crate::{
        access_control::list::ListMode,
        composer::{CompositionContext, MintComposition},
        templates::interface::{TemplateParams, TokenTemplate},
    },
    solana_pubkey::Pubkey,
    solana_zk_sdk::encryption::pod::elgamal::PodElGamalPubkey,
};

/// Closed-loop base plus confidential balances
#[derive(Clone, Debug, Default)]
pub struct RestrictedTransferTemplate {
    /// Shared parameters
    pub params: TemplateParams,
    /// Confidential balances authority, the mint authority if `None`
    pub confidential_authority: Option<Pubkey>,
    /// Let new accounts use confidential balances without approval
    pub auto_approve_new_accounts: bool,
    /// Auditor able to decrypt transfer amounts
    pub auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
}

impl TokenTemplate for RestrictedTransferTemplate {
    fn composition(&self, ctx: &CompositionContext) -> MintComposition {
        let composition = self.params.base_composition(ctx);
        let authority = self
            .confidential_authority
            .or_else(|| composition.mint_authority().map(|a| a.pubkey()));
        composition.with_confidential_balances(
            authority,
            self.auto_approve_new_accounts,
            self.auditor_elgamal_pubkey,
        )
    }

    fn gating(&self) -> Option<ListMode> {
        self.params.gating()
    }
}
