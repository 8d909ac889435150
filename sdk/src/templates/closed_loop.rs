use crate::{
    access_control::list::ListMode,
    composer::{CompositionContext, MintComposition},
    templates::interface::{TemplateParams, TokenTemplate},
};

/// Token confined to approved holders: metadata, pausable, permanent
/// delegate and a default account state, balances stay public
#[derive(Clone, Debug, Default)]
pub struct ClosedLoopTemplate {
    /// Shared parameters
    pub params: TemplateParams,
}

impl TokenTemplate for ClosedLoopTemplate {
    fn composition(&self, ctx: &CompositionContext) -> MintComposition {
        self.params.base_composition(ctx)
    }

    fn gating(&self) -> Option<ListMode> {
        self.params.gating()
    }
}
