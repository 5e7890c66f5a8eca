use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalKind, SwapQuote, VoteDirection, VoteRecord};

pub struct DafFundProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DafFundProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DafFundProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DafFundProxyMethods { wrapped_tx: tx }
    }
}

pub struct DafFundProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> DafFundProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        name: Arg0,
        owners: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&name)
            .argument(&owners)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> DafFundProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Voting engine ──

    pub fn vote<
        Arg0: ProxyArg<ProposalKind>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<VoteDirection>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        kind: Arg0,
        id: Arg1,
        direction: Arg2,
        weight: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&kind)
            .argument(&id)
            .argument(&direction)
            .argument(&weight)
            .original_result()
    }

    pub fn revoke<
        Arg0: ProxyArg<ProposalKind>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        kind: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revoke")
            .argument(&kind)
            .argument(&id)
            .original_result()
    }

    pub fn lock_voting_tokens(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("lockVotingTokens")
            .original_result()
    }

    pub fn unlock_voting_tokens<
        Arg0: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unlockVotingTokens")
            .argument(&amount)
            .original_result()
    }

    // ── Donations ──

    pub fn create_out_donation<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        amount: Arg0,
        ein: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createOutDonation")
            .argument(&amount)
            .argument(&ein)
            .original_result()
    }

    pub fn fulfill_donation<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fulfillDonation")
            .argument(&id)
            .original_result()
    }

    pub fn donate_to_daf<
        Arg0: ProxyArg<OptionalValue<SwapQuote<Env::Api>>>,
    >(
        self,
        quote: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("donateToDaf")
            .argument(&quote)
            .original_result()
    }

    pub fn donate_egld_to_daf<
        Arg0: ProxyArg<SwapQuote<Env::Api>>,
    >(
        self,
        quote: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("donateEgldToDaf")
            .argument(&quote)
            .original_result()
    }

    // ── Swaps ──

    pub fn create_swap<
        Arg0: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        token_in: Arg0,
        token_out: Arg1,
        amount_in: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createSwap")
            .argument(&token_in)
            .argument(&token_out)
            .argument(&amount_in)
            .original_result()
    }

    pub fn fulfill_swap<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<SwapQuote<Env::Api>>,
        Arg2: ProxyArg<OptionalValue<SwapQuote<Env::Api>>>,
    >(
        self,
        id: Arg0,
        swap_quote: Arg1,
        fee_quote: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fulfillSwap")
            .argument(&id)
            .argument(&swap_quote)
            .argument(&fee_quote)
            .original_result()
    }

    // ── Owner changes ──

    pub fn create_owner_change<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        targets: Arg0,
        is_addition: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createOwnerChange")
            .argument(&targets)
            .argument(&is_addition)
            .original_result()
    }

    pub fn fulfill_owner_change<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fulfillOwnerChange")
            .argument(&id)
            .original_result()
    }

    // ── Views ──

    pub fn name(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getName")
            .original_result()
    }

    pub fn owners(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwners")
            .original_result()
    }

    pub fn is_owner<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOwner")
            .argument(&address)
            .original_result()
    }

    pub fn registry(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRegistry")
            .original_result()
    }

    pub fn proposal<
        Arg0: ProxyArg<ProposalKind>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        kind: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Proposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&kind)
            .argument(&id)
            .original_result()
    }

    pub fn proposal_count<
        Arg0: ProxyArg<ProposalKind>,
    >(
        self,
        kind: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .argument(&kind)
            .original_result()
    }

    pub fn net_votes<
        Arg0: ProxyArg<ProposalKind>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        kind: Arg0,
        id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigInt<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNetVotes")
            .argument(&kind)
            .argument(&id)
            .original_result()
    }

    pub fn vote_of<
        Arg0: ProxyArg<ProposalKind>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        kind: Arg0,
        id: Arg1,
        voter: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<VoteRecord<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVote")
            .argument(&kind)
            .argument(&id)
            .argument(&voter)
            .original_result()
    }

    pub fn locked_voting_tokens<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        owner: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLockedVotingTokens")
            .argument(&owner)
            .original_result()
    }

    pub fn locked_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, TokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLockedToken")
            .original_result()
    }

    pub fn total_locked(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalLocked")
            .original_result()
    }

    pub fn total_voting_weight(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalVotingWeight")
            .original_result()
    }

    pub fn fetch_active_donations(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fetchActiveDonations")
            .original_result()
    }

    pub fn fetch_active_swaps(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fetchActiveSwaps")
            .original_result()
    }

    pub fn fetch_active_owner_changes(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("fetchActiveOwnerChanges")
            .original_result()
    }

    pub fn balance<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .argument(&token)
            .original_result()
    }
}
