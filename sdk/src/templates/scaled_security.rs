use {
    crate::{
        access_control::list::ListMode,
        composer::{CompositionContext, MintComposition},
        templates::interface::{TemplateParams, TokenTemplate},
    },
    solana_pubkey::Pubkey,
};

/// Closed-loop base plus a scaled UI amount, for securities whose displayed
/// balance follows splits and dividends
#[derive(Clone, Debug)]
pub struct ScaledSecurityTemplate {
    /// Shared parameters
    pub params: TemplateParams,
    /// Multiplier authority, the mint authority if `None`
    pub multiplier_authority: Option<Pubkey>,
    /// Initial display multiplier
    pub multiplier: f64,
}

impl Default for ScaledSecurityTemplate {
    fn default() -> Self {
        Self {
            params: TemplateParams::default(),
            multiplier_authority: None,
            multiplier: 1.0,
        }
    }
}

impl TokenTemplate for ScaledSecurityTemplate {
    fn composition(&self, ctx: &CompositionContext) -> MintComposition {
        let composition = self.params.base_composition(ctx);
        let authority = self
            .multiplier_authority
            .or_else(|| composition.mint_authority().map(|a| a.pubkey()));
        composition.with_scaled_ui_amount(authority, self.multiplier)
    }

    fn gating(&self) -> Option<ListMode> {
        self.params.gating()
    }
}
