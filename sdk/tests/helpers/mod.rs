#![allow(dead_code)]

pub mod common;
pub mod extension_initializer;
pub mod ledger;
pub mod mint_builder;
pub mod mint_extensions;
pub mod token_account_builder;
