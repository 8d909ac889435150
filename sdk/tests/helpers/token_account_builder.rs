use {
    crate::helpers::common::KeyedAccount,
    solana_account::Account,
    solana_program_option::COption,
    solana_program_pack::Pack,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    spl_associated_token_account_client::address::get_associated_token_address_with_program_id,
    spl_token_2022::state::{Account as TokenAccount, AccountState},
};

pub struct TokenAccountBuilder {
    mint: Pubkey,
    owner: Pubkey,
    amount: u64,
    account_key: Option<Pubkey>,
    state: AccountState,
}

impl TokenAccountBuilder {
    pub fn new(mint: Pubkey) -> Self {
        Self {
            mint,
            owner: Pubkey::new_unique(),
            amount: 0,
            account_key: None,
            state: AccountState::Initialized,
        }
    }

    pub fn owner(mut self, owner: Pubkey) -> Self {
        self.owner = owner;
        self
    }

    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    pub fn account_key(mut self, key: Pubkey) -> Self {
        self.account_key = Some(key);
        self
    }

    pub fn state(mut self, state: AccountState) -> Self {
        self.state = state;
        self
    }

    pub fn frozen(self) -> Self {
        self.state(AccountState::Frozen)
    }

    /// Defaults to the owner's associated token account
    pub fn build(self) -> KeyedAccount {
        let key = self.account_key.unwrap_or_else(|| {
            get_associated_token_address_with_program_id(
                &self.owner,
                &self.mint,
                &spl_token_2022::id(),
            )
        });
        let state = TokenAccount {
            mint: self.mint,
            owner: self.owner,
            amount: self.amount,
            delegate: COption::None,
            state: self.state,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        };
        let mut data = vec![0; TokenAccount::LEN];
        TokenAccount::pack(state, &mut data).unwrap();

        KeyedAccount {
            key,
            account: Account {
                lamports: Rent::default().minimum_balance(data.len()),
                data,
                owner: spl_token_2022::id(),
                ..Default::default()
            },
        }
    }
}
