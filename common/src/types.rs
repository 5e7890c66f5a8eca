multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Registry parameter bundles, read by every Fund at call time
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct FeeParams {
    pub fee_in_bps: u64,
    pub fee_out_bps: u64,
    pub fee_swap_bps: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct TimeParams {
    /// Elapsed seconds after which positive net support is enough
    pub wait_time: u64,
    /// Elapsed seconds before which nothing can be fulfilled
    pub interim_wait_time: u64,
    /// Elapsed seconds after which an unfulfilled proposal is dead
    pub expire_time: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RewardParams<M: ManagedTypeApi> {
    /// Reward token, also the token owners lock as voting weight
    pub reward_token: TokenIdentifier<M>,
    /// Reward units issued per stable unit donated
    pub rilla_swap_rate: BigUint<M>,
    /// Minimum locked amount to vote or count toward quorum
    pub rilla_vote_min: BigUint<M>,
    pub is_live: bool,
}

// ============================================================
// Swap quote: opaque instruction from the off-chain quoter
// ============================================================

/// Executed as a single sync call to `target::endpoint(arguments)` carrying
/// the input payment. Only the resulting balance delta of the output token is
/// checked, against `min_amount_out`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SwapQuote<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    pub min_amount_out: BigUint<M>,
}

// ============================================================
// Proposals
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalKind {
    DonationOut,
    Swap,
    OwnerChange,
}

impl ProposalKind {
    pub fn interim_wait_error(self) -> &'static str {
        match self {
            ProposalKind::DonationOut => {
                "Must allow the interim wait time before fulfilling donation"
            }
            ProposalKind::Swap => "Must allow the interim wait time before fulfilling swap",
            ProposalKind::OwnerChange => {
                "Must allow the interim wait time before fulfilling owner change"
            }
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalAction<M: ManagedTypeApi> {
    DonationOut {
        amount: BigUint<M>,
        ein: ManagedBuffer<M>,
    },
    Swap {
        token_in: TokenIdentifier<M>,
        token_out: TokenIdentifier<M>,
        amount_in: BigUint<M>,
    },
    OwnerChange {
        targets: ManagedVec<M, ManagedAddress<M>>,
        is_addition: bool,
    },
}

impl<M: ManagedTypeApi> ProposalAction<M> {
    pub fn kind(&self) -> ProposalKind {
        match self {
            ProposalAction::DonationOut { .. } => ProposalKind::DonationOut,
            ProposalAction::Swap { .. } => ProposalKind::Swap,
            ProposalAction::OwnerChange { .. } => ProposalKind::OwnerChange,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    /// Index in the kind's ledger, starting at 0
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub action: ProposalAction<M>,
    pub created_at: u64,
    /// Tally as cast, replaced by the live tally when fulfilled;
    /// net votes = support - objection
    pub support: BigUint<M>,
    pub objection: BigUint<M>,
    pub fulfilled: bool,
    pub revoked: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_closed(&self) -> bool {
        self.fulfilled || self.revoked
    }

    pub fn is_expired(&self, now: u64, expire_time: u64) -> bool {
        now.saturating_sub(self.created_at) >= expire_time
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteDirection {
    Support,
    Object,
}

/// The weight a voter currently has applied to one proposal. A new vote
/// replaces it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
}

// ============================================================
// Registry donation queue
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct QueuedDonation<M: ManagedTypeApi> {
    pub id: u64,
    pub fund: ManagedAddress<M>,
    pub fund_proposal_id: u64,
    pub ein: ManagedBuffer<M>,
    /// Stable amount after the outbound fee
    pub amount: BigUint<M>,
    pub fulfilled: bool,
}
