use spl_token_2022::extension::{BaseState, ExtensionType, PodStateWithExtensionsMut};

pub trait ExtensionInitializer<T: BaseState> {
    fn extension_type(&self) -> ExtensionType;

    /// TLV size of a variable-length extension, `None` for fixed-size ones
    fn variable_len(&self) -> Option<usize> {
        None
    }

    fn initialize(
        &self,
        state: &mut PodStateWithExtensionsMut<T>,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
