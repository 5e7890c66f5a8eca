multiversx_sc::imports!();

use daf_common::types::{Proposal, ProposalKind, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Identity ──

    #[view(getName)]
    #[storage_mapper("name")]
    fn name(&self) -> SingleValueMapper<ManagedBuffer>;

    /// The registry that deployed this DAF
    #[view(getRegistry)]
    #[storage_mapper("registry")]
    fn registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("owners")]
    fn owners(&self) -> SetMapper<ManagedAddress>;

    // ── Proposal ledgers, one per kind ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self, kind: ProposalKind) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, kind: ProposalKind, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("votes")]
    fn votes(
        &self,
        kind: ProposalKind,
        id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    /// Ids of the proposals of one kind that `voter` holds a vote on
    #[storage_mapper("votedProposals")]
    fn voted_proposals(
        &self,
        voter: &ManagedAddress,
        kind: ProposalKind,
    ) -> UnorderedSetMapper<u64>;

    // ── Locked voting tokens ──

    #[view(getLockedVotingTokens)]
    #[storage_mapper("lockedVotingTokens")]
    fn locked_voting_tokens(&self, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Reward token the current locks are held in
    #[view(getLockedToken)]
    #[storage_mapper("lockedToken")]
    fn locked_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getTotalLocked)]
    #[storage_mapper("totalLocked")]
    fn total_locked(&self) -> SingleValueMapper<BigUint>;
}
