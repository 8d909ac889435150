//! Token Templates: compose, classify and gate Token-2022 mints
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod access_control;
pub mod authority;
pub mod capability;
pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod extension;
pub mod inspector;
pub mod ledger;
pub mod management;
pub mod summary;
pub mod templates;

pub use {
    capability::Capability,
    classifier::{detect_archetypes, Archetype},
    composer::{CompositionContext, MintComposition},
    config::ProgramConfig,
    error::{ErrorCategory, TokenTemplateError},
    extension::{ExtensionDescriptor, ExtensionKind, OrderingClass},
    inspector::{inspect_mint, MintAccountView, MintAuthorities},
    ledger::LedgerReader,
    summary::MintSummary,
    templates::interface::TokenTemplate,
};

/// Result type returned by every builder in this crate
pub type Result<T> = std::result::Result<T, TokenTemplateError>;
