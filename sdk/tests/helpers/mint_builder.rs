use {
    crate::helpers::{
        common::{KeyedAccount, DEFAULT_MINT_DECIMALS, DEFAULT_MINT_SUPPLY},
        extension_initializer::ExtensionInitializer,
        mint_extensions::DescriptorInit,
    },
    solana_account::Account,
    solana_pubkey::Pubkey,
    solana_rent::Rent,
    spl_pod::primitives::{PodBool, PodU64},
    spl_token_2022::{
        extension::{BaseStateWithExtensionsMut, ExtensionType, PodStateWithExtensionsMut},
        pod::{PodCOption, PodMint},
    },
    spl_token_templates::{ExtensionDescriptor, MintComposition},
};

pub struct MintBuilder {
    mint_key: Pubkey,
    owner: Pubkey,
    mint_authority: Option<Pubkey>,
    freeze_authority: Option<Pubkey>,
    supply: u64,
    decimals: u8,
    extensions: Vec<Box<dyn ExtensionInitializer<PodMint>>>,
}

impl Default for MintBuilder {
    fn default() -> Self {
        Self {
            mint_key: Pubkey::new_unique(),
            owner: spl_token_2022::id(),
            mint_authority: Some(Pubkey::new_unique()),
            freeze_authority: None,
            supply: DEFAULT_MINT_SUPPLY,
            decimals: DEFAULT_MINT_DECIMALS,
            extensions: Vec::new(),
        }
    }
}

impl MintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The account a composition produces once its instructions have run
    pub fn from_composition(mint: Pubkey, composition: &MintComposition) -> Self {
        let mut builder = Self::new()
            .mint_key(mint)
            .decimals(composition.decimals())
            .supply(0);
        builder.mint_authority = composition.mint_authority().map(|a| a.pubkey());
        builder.freeze_authority = composition.freeze_authority();
        for descriptor in composition.extensions() {
            builder = builder.with_descriptor(descriptor.clone());
        }
        builder
    }

    pub fn mint_key(mut self, key: Pubkey) -> Self {
        self.mint_key = key;
        self
    }

    pub fn owner(mut self, owner: Pubkey) -> Self {
        self.owner = owner;
        self
    }

    pub fn mint_authority(mut self, authority: Pubkey) -> Self {
        self.mint_authority = Some(authority);
        self
    }

    pub fn freeze_authority(mut self, authority: Pubkey) -> Self {
        self.freeze_authority = Some(authority);
        self
    }

    pub fn supply(mut self, supply: u64) -> Self {
        self.supply = supply;
        self
    }

    pub fn decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_extension<T: ExtensionInitializer<PodMint> + 'static>(
        mut self,
        extension: T,
    ) -> Self {
        self.extensions.push(Box::new(extension));
        self
    }

    pub fn with_descriptor(self, descriptor: ExtensionDescriptor) -> Self {
        let mint = self.mint_key;
        self.with_extension(DescriptorInit { mint, descriptor })
    }

    pub fn build(self) -> KeyedAccount {
        let fixed_types: Vec<ExtensionType> = self
            .extensions
            .iter()
            .filter(|ext| ext.variable_len().is_none())
            .map(|ext| ext.extension_type())
            .collect();
        let variable_len: usize = self
            .extensions
            .iter()
            .filter_map(|ext| ext.variable_len())
            .sum();
        assert!(
            !fixed_types.is_empty() || variable_len == 0,
            "variable-length extensions need a fixed-size companion"
        );

        let mint_size =
            ExtensionType::try_calculate_account_len::<PodMint>(&fixed_types).unwrap() + variable_len;
        let mut buffer = vec![0; mint_size];
        let mut state =
            PodStateWithExtensionsMut::<PodMint>::unpack_uninitialized(&mut buffer).unwrap();

        state.base.decimals = self.decimals;
        state.base.is_initialized = PodBool::from_bool(true);
        state.base.supply = PodU64::from(self.supply);
        state.base.mint_authority = self
            .mint_authority
            .map(PodCOption::some)
            .unwrap_or(PodCOption::none());
        state.base.freeze_authority = self
            .freeze_authority
            .map(PodCOption::some)
            .unwrap_or(PodCOption::none());

        state.init_account_type().unwrap();

        for extension in &self.extensions {
            extension.initialize(&mut state).unwrap();
        }

        KeyedAccount {
            key: self.mint_key,
            account: Account {
                lamports: Rent::default().minimum_balance(buffer.len()),
                data: buffer,
                owner: self.owner,
                ..Default::default()
            },
        }
    }
}
