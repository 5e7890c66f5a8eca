multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("newDaf")]
    fn new_daf_event(
        &self,
        #[indexed] new_daf_address: &ManagedAddress,
        #[indexed] creator: &ManagedAddress,
        name: &ManagedBuffer,
    );

    #[event("charityModified")]
    fn charity_modified_event(&self, #[indexed] ein: &ManagedBuffer, #[indexed] accepted: bool);

    #[event("configChanged")]
    fn config_changed_event(&self, #[indexed] parameter: &ManagedBuffer);

    #[event("donationQueued")]
    fn donation_queued_event(
        &self,
        #[indexed] id: u64,
        #[indexed] fund: &ManagedAddress,
        #[indexed] ein: &ManagedBuffer,
        amount: &BigUint,
    );

    #[event("donationFulfilled")]
    fn donation_fulfilled_event(
        &self,
        #[indexed] id: u64,
        #[indexed] fund: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("rewardsDeposited")]
    fn rewards_deposited_event(&self, #[indexed] from: &ManagedAddress, amount: &BigUint);

    #[event("rewardIssued")]
    fn reward_issued_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] daf: &ManagedAddress,
        amount: &BigUint,
    );
}
