use {
    crate::helpers::extension_initializer::ExtensionInitializer,
    solana_pubkey::Pubkey,
    spl_pod::{
        optional_keys::OptionalNonZeroPubkey,
        primitives::{PodBool, PodU16, PodU64},
    },
    spl_token_2022::{
        extension::{
            confidential_transfer::ConfidentialTransferMint,
            default_account_state::DefaultAccountState,
            interest_bearing_mint::InterestBearingConfig,
            metadata_pointer::MetadataPointer,
            mint_close_authority::MintCloseAuthority,
            non_transferable::NonTransferable,
            pausable::PausableConfig,
            permanent_delegate::PermanentDelegate,
            scaled_ui_amount::ScaledUiAmountConfig,
            transfer_fee::{TransferFee, TransferFeeConfig},
            transfer_hook::TransferHook,
            BaseStateWithExtensionsMut, ExtensionType, PodStateWithExtensionsMut,
        },
        pod::PodMint,
    },
    spl_token_templates::ExtensionDescriptor,
    std::convert::TryFrom,
};

/// Writes a descriptor the way the token program does once its instruction
/// has executed
pub struct DescriptorInit {
    pub mint: Pubkey,
    pub descriptor: ExtensionDescriptor,
}

fn optional(key: Option<Pubkey>) -> Result<OptionalNonZeroPubkey, Box<dyn std::error::Error>> {
    Ok(OptionalNonZeroPubkey::try_from(key)?)
}

impl ExtensionInitializer<PodMint> for DescriptorInit {
    fn extension_type(&self) -> ExtensionType {
        self.descriptor.kind().extension_type()
    }

    fn variable_len(&self) -> Option<usize> {
        match &self.descriptor {
            ExtensionDescriptor::TokenMetadata(fields) => Some(
                fields
                    .to_token_metadata(&self.mint)
                    .unwrap()
                    .tlv_size_of()
                    .unwrap(),
            ),
            _ => None,
        }
    }

    fn initialize(
        &self,
        state: &mut PodStateWithExtensionsMut<PodMint>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.descriptor {
            ExtensionDescriptor::MetadataPointer {
                authority,
                metadata_address,
            } => {
                let extension = state.init_extension::<MetadataPointer>(false)?;
                extension.authority = optional(*authority)?;
                extension.metadata_address = optional(*metadata_address)?;
            }
            ExtensionDescriptor::TokenMetadata(fields) => {
                state.init_variable_len_extension(&fields.to_token_metadata(&self.mint)?, false)?;
            }
            ExtensionDescriptor::PermanentDelegate { delegate } => {
                let extension = state.init_extension::<PermanentDelegate>(false)?;
                extension.delegate = optional(Some(*delegate))?;
            }
            ExtensionDescriptor::Pausable { authority } => {
                let extension = state.init_extension::<PausableConfig>(false)?;
                extension.authority = optional(Some(*authority))?;
                extension.paused = PodBool::from_bool(false);
            }
            ExtensionDescriptor::DefaultAccountState { state: account_state } => {
                let extension = state.init_extension::<DefaultAccountState>(false)?;
                extension.state = *account_state as u8;
            }
            ExtensionDescriptor::ConfidentialBalances {
                authority,
                auto_approve_new_accounts,
                ..
            } => {
                let extension = state.init_extension::<ConfidentialTransferMint>(false)?;
                extension.authority = optional(*authority)?;
                extension.auto_approve_new_accounts = PodBool::from_bool(*auto_approve_new_accounts);
            }
            ExtensionDescriptor::ScaledUiAmount {
                authority,
                multiplier,
            } => {
                let extension = state.init_extension::<ScaledUiAmountConfig>(false)?;
                extension.authority = optional(*authority)?;
                extension.multiplier = (*multiplier).into();
                extension.new_multiplier = (*multiplier).into();
            }
            ExtensionDescriptor::TransferFee {
                transfer_fee_config_authority,
                withdraw_withheld_authority,
                transfer_fee_basis_points,
                maximum_fee,
            } => {
                let extension = state.init_extension::<TransferFeeConfig>(false)?;
                extension.transfer_fee_config_authority = optional(*transfer_fee_config_authority)?;
                extension.withdraw_withheld_authority = optional(*withdraw_withheld_authority)?;
                let fee = TransferFee {
                    epoch: PodU64::from(0),
                    maximum_fee: PodU64::from(*maximum_fee),
                    transfer_fee_basis_points: PodU16::from(*transfer_fee_basis_points),
                };
                extension.older_transfer_fee = fee;
                extension.newer_transfer_fee = fee;
            }
            ExtensionDescriptor::InterestBearing {
                rate_authority,
                rate,
            } => {
                let extension = state.init_extension::<InterestBearingConfig>(false)?;
                extension.rate_authority = optional(*rate_authority)?;
                extension.pre_update_average_rate = (*rate).into();
                extension.current_rate = (*rate).into();
            }
            ExtensionDescriptor::NonTransferable => {
                state.init_extension::<NonTransferable>(false)?;
            }
            ExtensionDescriptor::TransferHook {
                authority,
                program_id,
            } => {
                let extension = state.init_extension::<TransferHook>(false)?;
                extension.authority = optional(*authority)?;
                extension.program_id = optional(*program_id)?;
            }
        }
        Ok(())
    }
}

/// Pausable with an explicit paused flag
pub struct PausableInit {
    pub authority: Pubkey,
    pub paused: bool,
}

impl ExtensionInitializer<PodMint> for PausableInit {
    fn extension_type(&self) -> ExtensionType {
        ExtensionType::Pausable
    }

    fn initialize(
        &self,
        state: &mut PodStateWithExtensionsMut<PodMint>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let extension = state.init_extension::<PausableConfig>(false)?;
        extension.authority = optional(Some(self.authority))?;
        extension.paused = PodBool::from_bool(self.paused);
        Ok(())
    }
}

/// An extension outside the catalog
pub struct MintCloseAuthorityInit {
    pub close_authority: Pubkey,
}

impl ExtensionInitializer<PodMint> for MintCloseAuthorityInit {
    fn extension_type(&self) -> ExtensionType {
        ExtensionType::MintCloseAuthority
    }

    fn initialize(
        &self,
        state: &mut PodStateWithExtensionsMut<PodMint>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let extension = state.init_extension::<MintCloseAuthority>(false)?;
        extension.close_authority = optional(Some(self.close_authority))?;
        Ok(())
    }
}
