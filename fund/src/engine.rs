multiversx_sc::imports!();

use daf_common::{
    governance::{self, Maturity},
    types::{
        Proposal, ProposalAction, ProposalKind, RewardParams, TimeParams, VoteDirection,
        VoteRecord,
    },
};

/// Weighted voting with timers, shared by every proposal kind. Kind modules
/// create through `create_proposal` and run their side effect after
/// `begin_fulfillment` returns.
#[multiversx_sc::module]
pub trait ProposalEngineModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry_access::RegistryAccessModule
    + crate::voting_weight::VotingWeightModule
{
    // ========================================================
    // ENDPOINT: vote
    // A voter's new vote replaces the previous one, clamped to
    // the voter's locked weight.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, kind: ProposalKind, id: u64, direction: VoteDirection, weight: BigUint) {
        let caller = self.require_caller_owner("Only owners can vote");
        let time_params = self.fetch_time_params();
        let mut proposal = self.require_open_proposal(kind, id, &time_params);

        let reward_params = self.fetch_reward_params();
        let available = self.eligible_weight(&caller, &reward_params);
        require!(
            available > 0u64 || reward_params.rilla_vote_min == 0u64,
            "Voting balance below minimum"
        );
        let weight = if weight > available { available } else { weight };

        let vote_mapper = self.votes(kind, id, &caller);
        if !vote_mapper.is_empty() {
            let previous = vote_mapper.get();
            match previous.direction {
                VoteDirection::Support => proposal.support -= &previous.weight,
                VoteDirection::Object => proposal.objection -= &previous.weight,
            }
        }

        match direction {
            VoteDirection::Support => proposal.support += &weight,
            VoteDirection::Object => proposal.objection += &weight,
        }

        if weight == 0u64 {
            vote_mapper.clear();
            self.voted_proposals(&caller, kind).swap_remove(&id);
        } else {
            vote_mapper.set(VoteRecord {
                direction,
                weight: weight.clone(),
            });
            self.voted_proposals(&caller, kind).insert(id);
        }
        self.proposals(kind, id).set(&proposal);

        self.vote_cast_event(kind, id, &caller, direction, &weight);
    }

    // ========================================================
    // ENDPOINT: revoke
    // Any owner can end a proposal that is not yet ready.
    // ========================================================

    #[endpoint(revoke)]
    fn revoke(&self, kind: ProposalKind, id: u64) {
        let caller = self.require_caller_owner("Only owners can revoke");
        let time_params = self.fetch_time_params();
        let mut proposal = self.require_open_proposal(kind, id, &time_params);

        let reward_params = self.fetch_reward_params();
        let (support, objection) = self.live_tally(kind, id, &reward_params);
        let maturity =
            self.maturity_of(&proposal, &time_params, &support, &objection, &reward_params);
        require!(maturity != Maturity::Ready, "Proposal is ready to fulfill");

        proposal.revoked = true;
        self.proposals(kind, id).set(&proposal);

        self.proposal_revoked_event(kind, id, &caller);
    }

    // ========================================================
    // INTERNAL: lifecycle
    // ========================================================

    fn require_caller_owner(&self, message: &str) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.owners().contains(&caller), message);
        caller
    }

    fn create_proposal(
        &self,
        proposer: &ManagedAddress,
        action: ProposalAction<Self::Api>,
    ) -> u64 {
        let kind = action.kind();
        let id = self.proposal_count(kind).get();
        let now = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id,
            proposer: proposer.clone(),
            action,
            created_at: now,
            support: BigUint::zero(),
            objection: BigUint::zero(),
            fulfilled: false,
            revoked: false,
        };
        self.proposals(kind, id).set(&proposal);
        self.proposal_count(kind).set(id + 1);

        self.proposal_created_event(kind, id, proposer, now);
        id
    }

    fn require_existing_proposal(&self, kind: ProposalKind, id: u64) -> Proposal<Self::Api> {
        require!(
            id < self.proposal_count(kind).get(),
            "Proposal does not exist"
        );
        self.proposals(kind, id).get()
    }

    /// Not fulfilled, not revoked, not expired.
    fn require_open_proposal(
        &self,
        kind: ProposalKind,
        id: u64,
        time_params: &TimeParams,
    ) -> Proposal<Self::Api> {
        let proposal = self.require_existing_proposal(kind, id);
        require!(!proposal.fulfilled, "Proposal already fulfilled");
        require!(!proposal.revoked, "Proposal revoked");
        let now = self.blockchain().get_block_timestamp();
        require!(
            !proposal.is_expired(now, time_params.expire_time),
            "Proposal has expired"
        );
        proposal
    }

    /// Checks the caller, the proposal state and the maturity predicate
    /// against live registry parameters, then marks the proposal fulfilled.
    /// The tally is rebuilt from current owners' votes, each clamped to the
    /// owner's current weight. The caller runs the side effect afterwards;
    /// if it fails the whole transaction reverts, flag included.
    fn begin_fulfillment(&self, kind: ProposalKind, id: u64) -> Proposal<Self::Api> {
        let caller = self.require_caller_owner("Only owners can fulfill");
        let time_params = self.fetch_time_params();
        let mut proposal = self.require_open_proposal(kind, id, &time_params);

        let reward_params = self.fetch_reward_params();
        let (support, objection) = self.live_tally(kind, id, &reward_params);

        match self.maturity_of(&proposal, &time_params, &support, &objection, &reward_params) {
            Maturity::Ready => {}
            Maturity::TooEarly => {
                let message = kind.interim_wait_error();
                sc_panic!(message);
            }
            Maturity::Expired => sc_panic!("Proposal has expired"),
            Maturity::NeedsMajority => {
                sc_panic!("Majority support required before the wait time")
            }
            Maturity::NeedsSupport => sc_panic!("Proposal lacks positive support"),
        }

        let now = self.blockchain().get_block_timestamp();
        proposal.support = support;
        proposal.objection = objection;
        proposal.fulfilled = true;
        self.proposals(kind, id).set(&proposal);
        self.proposal_fulfilled_event(kind, id, &caller, now);

        proposal
    }

    fn maturity_of(
        &self,
        proposal: &Proposal<Self::Api>,
        time_params: &TimeParams,
        support: &BigUint,
        objection: &BigUint,
        reward_params: &RewardParams<Self::Api>,
    ) -> Maturity {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now.saturating_sub(proposal.created_at);
        let total_weight = self.eligible_total(reward_params);
        governance::maturity(elapsed, time_params, support, objection, &total_weight)
    }

    /// Support and objection summed over the current owners only.
    fn live_tally(
        &self,
        kind: ProposalKind,
        id: u64,
        reward_params: &RewardParams<Self::Api>,
    ) -> (BigUint, BigUint) {
        let mut support = BigUint::zero();
        let mut objection = BigUint::zero();
        for owner in self.owners().iter() {
            let vote_mapper = self.votes(kind, id, &owner);
            if vote_mapper.is_empty() {
                continue;
            }
            let vote = vote_mapper.get();
            let available = self.eligible_weight(&owner, reward_params);
            let weight = if vote.weight > available { available } else { vote.weight };
            match vote.direction {
                VoteDirection::Support => support += weight,
                VoteDirection::Object => objection += weight,
            }
        }
        (support, objection)
    }

    fn eligible_total(&self, reward_params: &RewardParams<Self::Api>) -> BigUint {
        let mut total = BigUint::zero();
        for owner in self.owners().iter() {
            total += self.eligible_weight(&owner, reward_params);
        }
        total
    }

    /// Drops every vote `voter` holds, in all three ledgers.
    fn clear_votes_of(&self, voter: &ManagedAddress) {
        for kind in [
            ProposalKind::DonationOut,
            ProposalKind::Swap,
            ProposalKind::OwnerChange,
        ] {
            let mut voted = self.voted_proposals(voter, kind);
            for id in voted.iter() {
                self.votes(kind, id, voter).clear();
            }
            voted.clear();
        }
    }

    fn active_proposals(&self, kind: ProposalKind) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let expire_time = self.fetch_time_params().expire_time;
        let now = self.blockchain().get_block_timestamp();
        let count = self.proposal_count(kind).get();

        for id in 0..count {
            let proposal = self.proposals(kind, id).get();
            if proposal.is_closed() || proposal.is_expired(now, expire_time) {
                continue;
            }
            result.push(proposal);
        }
        result
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Locked weight of the owners at or above the voting minimum. Quorum
    /// is measured against this, at fulfillment time.
    #[view(getTotalVotingWeight)]
    fn total_voting_weight(&self) -> BigUint {
        let reward_params = self.fetch_reward_params();
        self.eligible_total(&reward_params)
    }

    /// Expired proposals that never got fulfilled are not readable.
    #[view(getProposal)]
    fn get_proposal(&self, kind: ProposalKind, id: u64) -> Proposal<Self::Api> {
        let proposal = self.require_existing_proposal(kind, id);
        if !proposal.fulfilled {
            let now = self.blockchain().get_block_timestamp();
            let expire_time = self.fetch_time_params().expire_time;
            require!(
                !proposal.is_expired(now, expire_time),
                "Proposal has expired"
            );
        }
        proposal
    }

    /// Net of the live tally, the figure fulfillment is judged on.
    #[view(getNetVotes)]
    fn get_net_votes(&self, kind: ProposalKind, id: u64) -> BigInt {
        self.require_existing_proposal(kind, id);
        let reward_params = self.fetch_reward_params();
        let (support, objection) = self.live_tally(kind, id, &reward_params);
        BigInt::from_biguint(Sign::Plus, support) - BigInt::from_biguint(Sign::Plus, objection)
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        kind: ProposalKind,
        id: u64,
        voter: ManagedAddress,
    ) -> OptionalValue<VoteRecord<Self::Api>> {
        let vote_mapper = self.votes(kind, id, &voter);
        if vote_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(vote_mapper.get())
        }
    }
}
