use {
    crate::helpers::common::KeyedAccount,
    async_trait::async_trait,
    solana_account::Account,
    solana_hash::Hash,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    spl_token_templates::{LedgerReader, Result, TokenTemplateError},
    std::{
        collections::HashMap,
        sync::atomic::{AtomicUsize, Ordering},
    },
};

pub fn checkpoint() -> Hash {
    Hash::new_from_array([7; 32])
}

/// In-memory ledger
#[derive(Default)]
pub struct FakeLedger {
    accounts: HashMap<Pubkey, Account>,
    rent: Rent,
    failure: Option<String>,
    reads: AtomicUsize,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_account(mut self, keyed: &KeyedAccount) -> Self {
        self.add(keyed);
        self
    }

    pub fn add(&mut self, keyed: &KeyedAccount) {
        self.accounts.insert(keyed.key, keyed.account.clone());
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(TokenTemplateError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LedgerReader for FakeLedger {
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<Account>> {
        self.check()?;
        Ok(self.accounts.get(address).cloned())
    }

    async fn get_latest_checkpoint(&self) -> Result<Hash> {
        self.check()?;
        Ok(checkpoint())
    }

    async fn get_minimum_balance(&self, size: usize) -> Result<u64> {
        self.check()?;
        Ok(self.rent.minimum_balance(size))
    }
}
