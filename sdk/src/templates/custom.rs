use crate::{
    access_control::list::ListMode,
    composer::{CompositionContext, MintComposition},
    templates::interface::TokenTemplate,
};

/// Any composition, optionally gated.
///
/// Gating only becomes active on a mint whose new accounts start frozen, so
/// a gated custom composition should carry a `Frozen` default account state.
#[derive(Clone, Debug, Default)]
pub struct CustomTemplate {
    /// The mint to create
    pub composition: MintComposition,
    /// Mode of the list to activate, `None` for no gating
    pub gating: Option<ListMode>,
}

impl TokenTemplate for CustomTemplate {
    fn composition(&self, _ctx: &CompositionContext) -> MintComposition {
        self.composition.clone()
    }

    fn gating(&self) -> Option<ListMode> {
        self.gating
    }
}
