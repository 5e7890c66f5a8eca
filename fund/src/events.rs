multiversx_sc::imports!();

use daf_common::types::{ProposalKind, VoteDirection};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] kind: ProposalKind,
        #[indexed] id: u64,
        #[indexed] proposer: &ManagedAddress,
        created_at: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] kind: ProposalKind,
        #[indexed] id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] direction: VoteDirection,
        weight: &BigUint,
    );

    #[event("proposalFulfilled")]
    fn proposal_fulfilled_event(
        &self,
        #[indexed] kind: ProposalKind,
        #[indexed] id: u64,
        #[indexed] caller: &ManagedAddress,
        timestamp: u64,
    );

    #[event("proposalRevoked")]
    fn proposal_revoked_event(
        &self,
        #[indexed] kind: ProposalKind,
        #[indexed] id: u64,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("donationReceived")]
    fn donation_received_event(
        &self,
        #[indexed] donor: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] credited: &BigUint,
        reward: &BigUint,
    );

    #[event("donationSent")]
    fn donation_sent_event(
        &self,
        #[indexed] id: u64,
        #[indexed] ein: &ManagedBuffer,
        #[indexed] queue_id: u64,
        amount: &BigUint,
    );

    #[event("swapExecuted")]
    fn swap_executed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] token_in: &TokenIdentifier,
        #[indexed] token_out: &TokenIdentifier,
        amount_out: &BigUint,
    );

    #[event("ownersChanged")]
    fn owners_changed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] is_addition: bool,
        owner_count: u64,
    );

    #[event("votingTokensLocked")]
    fn voting_tokens_locked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );

    #[event("votingTokensUnlocked")]
    fn voting_tokens_unlocked_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );
}
