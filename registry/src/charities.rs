multiversx_sc::imports!();

/// Charities are identified by their EIN. Only accepted ones can receive
/// outbound donations.
#[multiversx_sc::module]
pub trait CharitiesModule: crate::events::EventsModule {
    #[only_owner]
    #[endpoint(modifyCharities)]
    fn modify_charities(&self, eins: ManagedVec<ManagedBuffer>, accepted: ManagedVec<bool>) {
        require!(eins.len() == accepted.len(), "Array lengths must match");

        for (ein, is_accepted) in eins.iter().zip(accepted.iter()) {
            self.charities().insert(ein.clone_value(), is_accepted);
            self.charity_modified_event(&ein, is_accepted);
        }
    }

    #[view(isAcceptedCharity)]
    fn is_accepted_charity(&self, ein: ManagedBuffer) -> bool {
        self.charities().get(&ein).unwrap_or(false)
    }

    /// Every EIN ever configured, with its current status.
    #[view(getCharities)]
    fn get_charities(&self) -> MultiValueEncoded<MultiValue2<ManagedBuffer, bool>> {
        let mut result = MultiValueEncoded::new();
        for (ein, accepted) in self.charities().iter() {
            result.push((ein, accepted).into());
        }
        result
    }

    #[storage_mapper("charities")]
    fn charities(&self) -> MapMapper<ManagedBuffer, bool>;
}
