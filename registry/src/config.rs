multiversx_sc::imports!();

use daf_common::{
    governance::BPS_DENOMINATOR,
    types::{FeeParams, RewardParams, TimeParams},
};

/// Global parameters every DAF reads at call time. Changes apply to
/// proposals already in flight.
#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ADMIN: addresses and tokens
    // ========================================================

    /// Template contract new DAFs are deployed from.
    #[only_owner]
    #[endpoint(setDafImplementation)]
    fn set_daf_implementation(&self, address: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&address),
            "Implementation must be a contract"
        );
        self.daf_implementation().set(&address);
        self.config_changed_event(&ManagedBuffer::from("dafImplementation"));
    }

    /// Queued payouts are held in the stable token, so it can only change
    /// once the queue is drained.
    #[only_owner]
    #[endpoint(setStableToken)]
    fn set_stable_token(&self, token: TokenIdentifier) {
        require!(
            self.unfulfilled_donation_count().get() == 0,
            "Unfulfilled donations pending"
        );
        self.require_distinct_tokens(&token, &self.reward_token().get());
        self.stable_token().set(&token);
        self.config_changed_event(&ManagedBuffer::from("stableToken"));
    }

    #[only_owner]
    #[endpoint(setRewardToken)]
    fn set_reward_token(&self, token: TokenIdentifier) {
        self.require_distinct_tokens(&self.stable_token().get(), &token);
        self.reward_token().set(&token);
        self.config_changed_event(&ManagedBuffer::from("rewardToken"));
    }

    #[only_owner]
    #[endpoint(setFeeAddress)]
    fn set_fee_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), "Invalid address");
        self.fee_address().set(&address);
        self.config_changed_event(&ManagedBuffer::from("feeAddress"));
    }

    #[only_owner]
    #[endpoint(setTreasuryAddress)]
    fn set_treasury_address(&self, address: ManagedAddress) {
        require!(!address.is_zero(), "Invalid address");
        self.treasury_address().set(&address);
        self.config_changed_event(&ManagedBuffer::from("treasuryAddress"));
    }

    // ========================================================
    // ADMIN: fees (basis points)
    // ========================================================

    #[only_owner]
    #[endpoint(setFeeInBps)]
    fn set_fee_in_bps(&self, bps: u64) {
        self.require_valid_bps(bps);
        self.fee_in_bps().set(bps);
        self.config_changed_event(&ManagedBuffer::from("feeInBps"));
    }

    #[only_owner]
    #[endpoint(setFeeOutBps)]
    fn set_fee_out_bps(&self, bps: u64) {
        self.require_valid_bps(bps);
        self.fee_out_bps().set(bps);
        self.config_changed_event(&ManagedBuffer::from("feeOutBps"));
    }

    #[only_owner]
    #[endpoint(setFeeSwapBps)]
    fn set_fee_swap_bps(&self, bps: u64) {
        self.require_valid_bps(bps);
        self.fee_swap_bps().set(bps);
        self.config_changed_event(&ManagedBuffer::from("feeSwapBps"));
    }

    // ========================================================
    // ADMIN: time windows (seconds)
    // ========================================================

    #[only_owner]
    #[endpoint(setWaitTime)]
    fn set_wait_time(&self, seconds: u64) {
        require!(seconds > 0, "Duration must be positive");
        self.wait_time().set(seconds);
        self.config_changed_event(&ManagedBuffer::from("waitTime"));
    }

    #[only_owner]
    #[endpoint(setInterimWaitTime)]
    fn set_interim_wait_time(&self, seconds: u64) {
        require!(seconds > 0, "Duration must be positive");
        self.interim_wait_time().set(seconds);
        self.config_changed_event(&ManagedBuffer::from("interimWaitTime"));
    }

    #[only_owner]
    #[endpoint(setExpireTime)]
    fn set_expire_time(&self, seconds: u64) {
        require!(seconds > 0, "Duration must be positive");
        self.expire_time().set(seconds);
        self.config_changed_event(&ManagedBuffer::from("expireTime"));
    }

    // ========================================================
    // ADMIN: rewards and voting
    // ========================================================

    /// A zero minimum lets any owner vote, including with no balance.
    #[only_owner]
    #[endpoint(setRillaVoteMin)]
    fn set_rilla_vote_min(&self, amount: BigUint) {
        self.rilla_vote_min().set(&amount);
        self.config_changed_event(&ManagedBuffer::from("rillaVoteMin"));
    }

    #[only_owner]
    #[endpoint(setRillaSwapRate)]
    fn set_rilla_swap_rate(&self, rate: BigUint) {
        require!(rate > 0u64, "Rate must be positive");
        self.rilla_swap_rate().set(&rate);
        self.config_changed_event(&ManagedBuffer::from("rillaSwapRate"));
    }

    #[only_owner]
    #[endpoint(setRewardsLive)]
    fn set_rewards_live(&self, live: bool) {
        self.rewards_live().set(live);
        self.config_changed_event(&ManagedBuffer::from("rewardsLive"));
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_valid_bps(&self, bps: u64) {
        require!(bps <= BPS_DENOMINATOR, "Fee above 10000 bps");
    }

    fn require_distinct_tokens(
        &self,
        stable_token: &TokenIdentifier,
        reward_token: &TokenIdentifier,
    ) {
        require!(stable_token.is_valid_esdt_identifier(), "Invalid token");
        require!(reward_token.is_valid_esdt_identifier(), "Invalid token");
        require!(
            stable_token != reward_token,
            "Stable and reward tokens must differ"
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getFeeParams)]
    fn fee_params(&self) -> FeeParams {
        FeeParams {
            fee_in_bps: self.fee_in_bps().get(),
            fee_out_bps: self.fee_out_bps().get(),
            fee_swap_bps: self.fee_swap_bps().get(),
        }
    }

    #[view(getTimeParams)]
    fn time_params(&self) -> TimeParams {
        TimeParams {
            wait_time: self.wait_time().get(),
            interim_wait_time: self.interim_wait_time().get(),
            expire_time: self.expire_time().get(),
        }
    }

    /// Reward tokens held by the registry and available for donor rewards.
    #[view(getRewardReserve)]
    fn reward_reserve(&self) -> BigUint {
        let token = EgldOrEsdtTokenIdentifier::esdt(self.reward_token().get());
        self.blockchain().get_sc_balance(&token, 0)
    }

    /// `is_live` is false while the reserve is empty, even with the flag on.
    #[view(getRewardParams)]
    fn reward_params(&self) -> RewardParams<Self::Api> {
        RewardParams {
            reward_token: self.reward_token().get(),
            rilla_swap_rate: self.rilla_swap_rate().get(),
            rilla_vote_min: self.rilla_vote_min().get(),
            is_live: self.rewards_live().get() && self.reward_reserve() > 0u64,
        }
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getDafImplementation)]
    #[storage_mapper("dafImplementation")]
    fn daf_implementation(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStableToken)]
    #[storage_mapper("stableToken")]
    fn stable_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRewardToken)]
    #[storage_mapper("rewardToken")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getFeeAddress)]
    #[storage_mapper("feeAddress")]
    fn fee_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTreasuryAddress)]
    #[storage_mapper("treasuryAddress")]
    fn treasury_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("feeInBps")]
    fn fee_in_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("feeOutBps")]
    fn fee_out_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("feeSwapBps")]
    fn fee_swap_bps(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("waitTime")]
    fn wait_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("interimWaitTime")]
    fn interim_wait_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("expireTime")]
    fn expire_time(&self) -> SingleValueMapper<u64>;

    #[view(getRillaVoteMin)]
    #[storage_mapper("rillaVoteMin")]
    fn rilla_vote_min(&self) -> SingleValueMapper<BigUint>;

    #[view(getRillaSwapRate)]
    #[storage_mapper("rillaSwapRate")]
    fn rilla_swap_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(isRewardsLive)]
    #[storage_mapper("rewardsLive")]
    fn rewards_live(&self) -> SingleValueMapper<bool>;

    /// Kept here so the stable-token setter can see the queue.
    #[view(getUnfulfilledDonationCount)]
    #[storage_mapper("unfulfilledDonationCount")]
    fn unfulfilled_donation_count(&self) -> SingleValueMapper<u64>;
}
