use multiversx_sc::proxy_imports::*;

use crate::types::{FeeParams, QueuedDonation, RewardParams, TimeParams};

pub struct DafRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DafRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DafRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DafRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct DafRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> DafRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        daf_implementation: Arg0,
        stable_token: Arg1,
        reward_token: Arg2,
        fee_address: Arg3,
        treasury_address: Arg4,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&daf_implementation)
            .argument(&stable_token)
            .argument(&reward_token)
            .argument(&fee_address)
            .argument(&treasury_address)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> DafRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Factory & admin ──

    pub fn make_daf<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        name: Arg0,
        owners: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("makeDaf")
            .argument(&name)
            .argument(&owners)
            .original_result()
    }

    pub fn modify_charities<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, bool>>,
    >(
        self,
        eins: Arg0,
        accepted: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("modifyCharities")
            .argument(&eins)
            .argument(&accepted)
            .original_result()
    }

    pub fn fulfill_donations<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, u64>>,
    >(
        self,
        ids: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fulfillDonations")
            .argument(&ids)
            .original_result()
    }

    pub fn deposit_rewards(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositRewards")
            .original_result()
    }

    pub fn set_daf_implementation<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setDafImplementation")
            .argument(&address)
            .original_result()
    }

    pub fn set_stable_token<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setStableToken")
            .argument(&token)
            .original_result()
    }

    pub fn set_reward_token<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRewardToken")
            .argument(&token)
            .original_result()
    }

    pub fn set_fee_address<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFeeAddress")
            .argument(&address)
            .original_result()
    }

    pub fn set_treasury_address<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setTreasuryAddress")
            .argument(&address)
            .original_result()
    }

    pub fn set_fee_in_bps<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bps: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFeeInBps")
            .argument(&bps)
            .original_result()
    }

    pub fn set_fee_out_bps<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bps: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFeeOutBps")
            .argument(&bps)
            .original_result()
    }

    pub fn set_fee_swap_bps<
        Arg0: ProxyArg<u64>,
    >(
        self,
        bps: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setFeeSwapBps")
            .argument(&bps)
            .original_result()
    }

    pub fn set_wait_time<
        Arg0: ProxyArg<u64>,
    >(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setWaitTime")
            .argument(&seconds)
            .original_result()
    }

    pub fn set_interim_wait_time<
        Arg0: ProxyArg<u64>,
    >(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setInterimWaitTime")
            .argument(&seconds)
            .original_result()
    }

    pub fn set_expire_time<
        Arg0: ProxyArg<u64>,
    >(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setExpireTime")
            .argument(&seconds)
            .original_result()
    }

    pub fn set_rilla_vote_min<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRillaVoteMin")
            .argument(&amount)
            .original_result()
    }

    pub fn set_rilla_swap_rate<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        rate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRillaSwapRate")
            .argument(&rate)
            .original_result()
    }

    pub fn set_rewards_live<
        Arg0: ProxyArg<bool>,
    >(
        self,
        live: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setRewardsLive")
            .argument(&live)
            .original_result()
    }

    // ── Fund-facing writes ──

    pub fn queue_donation<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        fund_proposal_id: Arg0,
        ein: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, u64> {
        self.wrapped_tx
            .raw_call("queueDonation")
            .argument(&fund_proposal_id)
            .argument(&ein)
            .original_result()
    }

    pub fn record_owner_change<
        Arg0: ProxyArg<bool>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        is_addition: Arg0,
        owners: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("recordOwnerChange")
            .argument(&is_addition)
            .argument(&owners)
            .original_result()
    }

    pub fn issue_donation_reward<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        donor: Arg0,
        stable_amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("issueDonationReward")
            .argument(&donor)
            .argument(&stable_amount)
            .original_result()
    }

    // ── Views ──

    pub fn is_accepted_charity<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        ein: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAcceptedCharity")
            .argument(&ein)
            .original_result()
    }

    pub fn fee_params(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, FeeParams> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFeeParams")
            .original_result()
    }

    pub fn time_params(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TimeParams> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTimeParams")
            .original_result()
    }

    pub fn reward_params(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, RewardParams<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardParams")
            .original_result()
    }

    pub fn stable_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStableToken")
            .original_result()
    }

    pub fn fee_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFeeAddress")
            .original_result()
    }

    pub fn treasury_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTreasuryAddress")
            .original_result()
    }

    pub fn dafs_for_owner<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDafsForOwner")
            .argument(&owner)
            .original_result()
    }

    pub fn is_daf<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isDaf")
            .argument(&address)
            .original_result()
    }

    pub fn unfulfilled_donations(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, QueuedDonation<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUnfulfilledDonations")
            .original_result()
    }

    pub fn queued_donation<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, QueuedDonation<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getQueuedDonation")
            .argument(&id)
            .original_result()
    }

    pub fn unfulfilled_donation_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getUnfulfilledDonationCount")
            .original_result()
    }

    pub fn reward_reserve(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRewardReserve")
            .original_result()
    }
}
