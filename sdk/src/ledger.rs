//! Read-only network access and transaction assembly

use {
    crate::Result,
    async_trait::async_trait,
    solana_account::Account,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_hash::Hash,
    solana_instruction::Instruction,
    solana_pubkey::Pubkey,
    solana_transaction::Transaction,
};

/// The narrow slice of a ledger node every builder needs.
///
/// Implementations surface their failures as
/// [`TokenTemplateError::Transport`](crate::TokenTemplateError::Transport)
/// and never retry.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Fetch an account, `None` if it does not exist
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<Account>>;

    /// Latest blockhash, used as the transaction lifetime
    async fn get_latest_checkpoint(&self) -> Result<Hash>;

    /// Lamports needed for an account of `size` bytes to be rent exempt
    async fn get_minimum_balance(&self, size: usize) -> Result<u64>;
}

#[async_trait]
impl LedgerReader for RpcClient {
    async fn get_account_info(&self, address: &Pubkey) -> Result<Option<Account>> {
        Ok(self
            .get_account_with_commitment(address, self.commitment())
            .await?
            .value)
    }

    async fn get_latest_checkpoint(&self) -> Result<Hash> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn get_minimum_balance(&self, size: usize) -> Result<u64> {
        Ok(self.get_minimum_balance_for_rent_exemption(size).await?)
    }
}

/// Assemble an unsigned transaction paid by `payer`, valid until the latest
/// checkpoint expires
pub async fn assemble_transaction<L: LedgerReader + ?Sized>(
    ledger: &L,
    payer: &Pubkey,
    instructions: &[Instruction],
) -> Result<Transaction> {
    let latest_blockhash = ledger.get_latest_checkpoint().await?;
    let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
    transaction.message.recent_blockhash = latest_blockhash;
    log::debug!(
        "Assembled transaction with {} instructions for payer {}",
        instructions.len(),
        payer
    );
    Ok(transaction)
}
