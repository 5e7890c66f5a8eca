multiversx_sc::imports!();

use daf_common::{
    registry_proxy::DafRegistryProxy,
    types::{FeeParams, RewardParams, TimeParams},
};

/// Every interaction with the registry goes through here. Parameters are
/// fetched per call, so admin changes apply to in-flight proposals.
#[multiversx_sc::module]
pub trait RegistryAccessModule: crate::storage::StorageModule {
    // ========================================================
    // Reads
    // ========================================================

    fn fetch_fee_params(&self) -> FeeParams {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .fee_params()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn fetch_time_params(&self) -> TimeParams {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .time_params()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn fetch_reward_params(&self) -> RewardParams<Self::Api> {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .reward_params()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn fetch_stable_token(&self) -> TokenIdentifier {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .stable_token()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn fetch_fee_address(&self) -> ManagedAddress {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .fee_address()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn require_accepted_charity(&self, ein: &ManagedBuffer) {
        let registry = self.registry().get();
        let accepted: bool = self
            .tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .is_accepted_charity(ein.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(accepted, "Charity not enabled");
    }

    // ========================================================
    // Writes: the registry only accepts these from its own DAFs
    // ========================================================

    /// Moves `amount` of the stable token into the registry's payout queue
    /// and returns the queue id.
    fn queue_donation_at_registry(
        &self,
        proposal_id: u64,
        ein: &ManagedBuffer,
        stable_token: &TokenIdentifier,
        amount: &BigUint,
    ) -> u64 {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .queue_donation(proposal_id, ein.clone())
            .single_esdt(stable_token, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn record_owner_change_at_registry(
        &self,
        is_addition: bool,
        changed: MultiValueEncoded<ManagedAddress>,
    ) {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .record_owner_change(is_addition, changed)
            .sync_call();
    }

    /// Returns the reward paid to the donor, zero while rewards are off.
    fn request_donation_reward(&self, donor: &ManagedAddress, stable_amount: &BigUint) -> BigUint {
        let registry = self.registry().get();
        self.tx()
            .to(&registry)
            .typed(DafRegistryProxy)
            .issue_donation_reward(donor.clone(), stable_amount.clone())
            .returns(ReturnsResult)
            .sync_call()
    }
}
