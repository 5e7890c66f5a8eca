#![no_std]

multiversx_sc::imports!();

pub mod charities;
pub mod config;
pub mod donation_queue;
pub mod events;
pub mod factory;
pub mod rewards;

use daf_common::governance::{
    DEFAULT_EXPIRE_TIME, DEFAULT_INTERIM_WAIT_TIME, DEFAULT_WAIT_TIME,
};

// ============================================================
// Contract
// ============================================================

/// Creates DAFs and holds everything they share: fees, time windows, reward
/// settings, the accepted charity list and the outbound payout queue. The
/// contract owner is the admin.
#[multiversx_sc::contract]
pub trait DafRegistry:
    events::EventsModule
    + config::ConfigModule
    + factory::FactoryModule
    + charities::CharitiesModule
    + donation_queue::DonationQueueModule
    + rewards::RewardsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Fees start at zero and time windows at one day (interim), seven days
    /// (wait) and thirty days (expiry). Rewards start switched off.
    #[init]
    fn init(
        &self,
        daf_implementation: ManagedAddress,
        stable_token: TokenIdentifier,
        reward_token: TokenIdentifier,
        fee_address: ManagedAddress,
        treasury_address: ManagedAddress,
    ) {
        require!(
            self.blockchain().is_smart_contract(&daf_implementation),
            "Implementation must be a contract"
        );
        self.require_distinct_tokens(&stable_token, &reward_token);
        require!(!fee_address.is_zero(), "Invalid address");
        require!(!treasury_address.is_zero(), "Invalid address");

        self.daf_implementation().set(&daf_implementation);
        self.stable_token().set(&stable_token);
        self.reward_token().set(&reward_token);
        self.fee_address().set(&fee_address);
        self.treasury_address().set(&treasury_address);

        self.interim_wait_time().set(DEFAULT_INTERIM_WAIT_TIME);
        self.wait_time().set(DEFAULT_WAIT_TIME);
        self.expire_time().set(DEFAULT_EXPIRE_TIME);
        self.rilla_vote_min().set(BigUint::from(1u64));
        self.rilla_swap_rate().set(BigUint::from(1u64));
    }

    #[upgrade]
    fn upgrade(&self) {}
}
