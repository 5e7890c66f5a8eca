mod harness;

use daf_common::{
    fund_proxy::DafFundProxy,
    registry_proxy::DafRegistryProxy,
    types::{Proposal, ProposalKind, SwapQuote, VoteDirection},
};
use harness::*;
use multiversx_sc_scenario::imports::*;

/// DAF owned by the first `owner_count` owners, holding 1000 stable, with
/// the test EIN accepted.
fn funded_daf(owner_count: usize) -> DafTestState {
    let mut state = DafTestState::new();
    state.modify_charities(&[(EIN, true)]);
    state.make_daf(DAF_NAME, &OWNERS[..owner_count]);
    state.donate_stable(DAF, 1_000);
    state
}

fn net_votes(state: &mut DafTestState, kind: ProposalKind, id: u64) -> BigInt<StaticApi> {
    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .net_votes(kind, id)
        .returns(ReturnsResult)
        .run()
}

fn active_donations(state: &mut DafTestState) -> Vec<Proposal<StaticApi>> {
    let active: MultiValueVec<Proposal<StaticApi>> = state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .fetch_active_donations()
        .returns(ReturnsResultUnmanaged)
        .run();
    active.into_vec()
}

fn fulfill_donation_expect_error(state: &mut DafTestState, id: u64, message: &str) {
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_donation(id)
        .returns(ExpectError(4, message))
        .run();
}

fn fulfill_donation(state: &mut DafTestState, id: u64) {
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_donation(id)
        .run();
}

// ============================================================
// Maturity
// ============================================================

#[test]
fn eight_owner_donation_needs_majority_before_wait_time() {
    let mut state = funded_daf(8);
    let id = state.create_out_donation(DAF, OWNERS[0], 500);
    assert_eq!(id, 0);

    fulfill_donation_expect_error(
        &mut state,
        id,
        "Must allow the interim wait time before fulfilling donation",
    );

    state.support_all(DAF, &OWNERS[..4], ProposalKind::DonationOut, id);
    state.set_timestamp(START + DAY + 1);
    fulfill_donation_expect_error(
        &mut state,
        id,
        "Majority support required before the wait time",
    );
    assert!(!state.proposal_fulfilled(DAF, ProposalKind::DonationOut, id));

    state.support_all(DAF, &OWNERS[4..5], ProposalKind::DonationOut, id);
    fulfill_donation(&mut state, id);

    assert!(state.proposal_fulfilled(DAF, ProposalKind::DonationOut, id));
    state.world.check_account(DAF).esdt_balance(STABLE, 500);
    state.world.check_account(REGISTRY).esdt_balance(STABLE, 500);
    assert_eq!(state.unfulfilled_donation_count(), 1);

    fulfill_donation_expect_error(&mut state, id, "Proposal already fulfilled");
}

#[test]
fn after_wait_time_positive_net_is_enough() {
    let mut state = funded_daf(8);
    let passing = state.create_out_donation(DAF, OWNERS[0], 100);
    let failing = state.create_out_donation(DAF, OWNERS[0], 100);

    state.support_all(DAF, &OWNERS[..3], ProposalKind::DonationOut, passing);
    state.vote(DAF, OWNERS[3], ProposalKind::DonationOut, passing, VoteDirection::Object, 100);

    state.vote(DAF, OWNERS[0], ProposalKind::DonationOut, failing, VoteDirection::Support, 100);
    state.vote(DAF, OWNERS[1], ProposalKind::DonationOut, failing, VoteDirection::Object, 100);

    state.set_timestamp(START + 2 * DAY);
    fulfill_donation_expect_error(
        &mut state,
        passing,
        "Majority support required before the wait time",
    );

    state.set_timestamp(START + 7 * DAY);
    fulfill_donation(&mut state, passing);
    fulfill_donation_expect_error(&mut state, failing, "Proposal lacks positive support");
}

#[test]
fn interim_error_names_the_proposal_kind() {
    let mut state = funded_daf(1);

    let swap_id: u64 = state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .create_swap(STABLE, DAI, 100u64)
        .returns(ReturnsResult)
        .run();
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_swap(
            swap_id,
            mock_quote(DAI, 100, 100),
            OptionalValue::<SwapQuote<StaticApi>>::None,
        )
        .returns(ExpectError(4, "Must allow the interim wait time before fulfilling swap"))
        .run();

    let change_id: u64 = state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .create_owner_change(address_vec(&[OWNERS[1]]), true)
        .returns(ReturnsResult)
        .run();
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_owner_change(change_id)
        .returns(ExpectError(
            4,
            "Must allow the interim wait time before fulfilling owner change",
        ))
        .run();

    // every kind keeps its own id sequence
    assert_eq!(swap_id, 0);
    assert_eq!(change_id, 0);
}

#[test]
fn parameter_changes_apply_to_open_proposals() {
    let mut state = funded_daf(1);
    let id = state.create_out_donation(DAF, OWNERS[0], 500);
    state.support_all(DAF, &OWNERS[..1], ProposalKind::DonationOut, id);

    state
        .world
        .tx()
        .from(ADMIN)
        .to(REGISTRY)
        .typed(DafRegistryProxy)
        .set_interim_wait_time(2 * DAY)
        .run();
    state.set_fee_out_bps(1_000);

    state.set_timestamp(START + DAY + 1);
    fulfill_donation_expect_error(
        &mut state,
        id,
        "Must allow the interim wait time before fulfilling donation",
    );

    state.set_timestamp(START + 2 * DAY);
    fulfill_donation(&mut state, id);

    state.world.check_account(FEE_COLLECTOR).esdt_balance(STABLE, 50);
    state.world.check_account(REGISTRY).esdt_balance(STABLE, 450);
    state.world.check_account(DAF).esdt_balance(STABLE, 500);
}

// ============================================================
// Voting
// ============================================================

#[test]
fn new_vote_replaces_previous_one() {
    let mut state = funded_daf(2);
    let id = state.create_out_donation(DAF, OWNERS[0], 100);
    let kind = ProposalKind::DonationOut;

    state.vote(DAF, OWNERS[0], kind, id, VoteDirection::Support, 100);
    assert_eq!(net_votes(&mut state, kind, id), BigInt::from(100i64));

    state.vote(DAF, OWNERS[0], kind, id, VoteDirection::Object, 50);
    assert_eq!(net_votes(&mut state, kind, id), BigInt::from(-50i64));

    let vote = state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .vote_of(kind, id, OWNERS[0])
        .returns(ReturnsResult)
        .run()
        .into_option();
    let vote = vote.expect("vote should be recorded");
    assert_eq!(vote.direction, VoteDirection::Object);
    assert_eq!(vote.weight, BigUint::from(50u64));

    // weight is clamped to the voter's balance
    state.vote(DAF, OWNERS[1], kind, id, VoteDirection::Support, 1_000);
    assert_eq!(net_votes(&mut state, kind, id), BigInt::from(50i64));

    // zero weight withdraws the vote
    state.vote(DAF, OWNERS[1], kind, id, VoteDirection::Support, 0);
    assert_eq!(net_votes(&mut state, kind, id), BigInt::from(-50i64));
    let vote = state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .vote_of(kind, id, OWNERS[1])
        .returns(ReturnsResult)
        .run()
        .into_option();
    assert!(vote.is_none());
}

#[test]
fn voters_must_be_owners_with_enough_balance() {
    let mut state = DafTestState::new();
    state.modify_charities(&[(EIN, true)]);
    state.make_daf(DAF_NAME, &[OWNERS[0], LURKER]);
    state.donate_stable(DAF, 1_000);
    let id = state.create_out_donation(DAF, OWNERS[0], 100);

    state
        .world
        .tx()
        .from(LURKER)
        .to(DAF)
        .typed(DafFundProxy)
        .vote(ProposalKind::DonationOut, id, VoteDirection::Support, 1u64)
        .returns(ExpectError(4, "Voting balance below minimum"))
        .run();

    state
        .world
        .tx()
        .from(DONOR)
        .to(DAF)
        .typed(DafFundProxy)
        .vote(ProposalKind::DonationOut, id, VoteDirection::Support, 1u64)
        .returns(ExpectError(4, "Only owners can vote"))
        .run();

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .vote(ProposalKind::DonationOut, 7u64, VoteDirection::Support, 1u64)
        .returns(ExpectError(4, "Proposal does not exist"))
        .run();

    // the lurker's empty balance is left out of the quorum
    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .total_voting_weight()
        .returns(ExpectValue(OWNER_WEIGHT))
        .run();
}

// ============================================================
// Lifecycle
// ============================================================

fn revoke(state: &mut DafTestState, caller: TestAddress, id: u64) {
    state
        .world
        .tx()
        .from(caller)
        .to(DAF)
        .typed(DafFundProxy)
        .revoke(ProposalKind::DonationOut, id)
        .run();
}

fn revoke_expect_error(
    state: &mut DafTestState,
    caller: TestAddress,
    id: u64,
    message: &str,
) {
    state
        .world
        .tx()
        .from(caller)
        .to(DAF)
        .typed(DafFundProxy)
        .revoke(ProposalKind::DonationOut, id)
        .returns(ExpectError(4, message))
        .run();
}

#[test]
fn any_owner_revokes_until_ready() {
    let mut state = funded_daf(2);
    let open = state.create_out_donation(DAF, OWNERS[0], 100);
    let backed = state.create_out_donation(DAF, OWNERS[0], 100);
    let early = state.create_out_donation(DAF, OWNERS[0], 100);
    state.support_all(DAF, &OWNERS[..2], ProposalKind::DonationOut, backed);
    state.support_all(DAF, &OWNERS[..2], ProposalKind::DonationOut, early);

    revoke_expect_error(&mut state, DONOR, open, "Only owners can revoke");

    // full support inside the interim window is not yet ready
    revoke(&mut state, OWNERS[1], early);

    state.set_timestamp(START + DAY);
    revoke_expect_error(&mut state, OWNERS[1], backed, "Proposal is ready to fulfill");

    // not the proposer, and no support behind it
    revoke(&mut state, OWNERS[1], open);

    state
        .world
        .tx()
        .from(OWNERS[1])
        .to(DAF)
        .typed(DafFundProxy)
        .vote(ProposalKind::DonationOut, open, VoteDirection::Support, 100u64)
        .returns(ExpectError(4, "Proposal revoked"))
        .run();

    fulfill_donation(&mut state, backed);

    state.set_timestamp(START + 8 * DAY);
    fulfill_donation_expect_error(&mut state, open, "Proposal revoked");
    fulfill_donation_expect_error(&mut state, early, "Proposal revoked");
    assert!(active_donations(&mut state).is_empty());
}

#[test]
fn fulfilled_proposals_are_final() {
    let mut state = funded_daf(1);
    let id = state.create_out_donation(DAF, OWNERS[0], 100);
    state.support_all(DAF, &OWNERS[..1], ProposalKind::DonationOut, id);
    state.set_timestamp(START + DAY);
    fulfill_donation(&mut state, id);

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .vote(ProposalKind::DonationOut, id, VoteDirection::Object, 100u64)
        .returns(ExpectError(4, "Proposal already fulfilled"))
        .run();

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .revoke(ProposalKind::DonationOut, id)
        .returns(ExpectError(4, "Proposal already fulfilled"))
        .run();

    // still readable once the expiry window has passed
    state.set_timestamp(START + 31 * DAY);
    assert!(state.proposal_fulfilled(DAF, ProposalKind::DonationOut, id));
}

#[test]
fn expired_proposals_are_dead() {
    let mut state = funded_daf(1);
    let id = state.create_out_donation(DAF, OWNERS[0], 100);
    state.support_all(DAF, &OWNERS[..1], ProposalKind::DonationOut, id);

    state.set_timestamp(START + 30 * DAY);
    fulfill_donation_expect_error(&mut state, id, "Proposal has expired");

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .proposal(ProposalKind::DonationOut, id)
        .returns(ExpectError(4, "Proposal has expired"))
        .run();

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .proposal(ProposalKind::DonationOut, id + 1)
        .returns(ExpectError(4, "Proposal does not exist"))
        .run();

    assert!(active_donations(&mut state).is_empty());
}

#[test]
fn out_donation_needs_balance_and_owner() {
    let mut state = funded_daf(1);

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .create_out_donation(1_001u64, EIN)
        .returns(ExpectError(4, "Insufficient stable balance"))
        .run();

    state
        .world
        .tx()
        .from(DONOR)
        .to(DAF)
        .typed(DafFundProxy)
        .create_out_donation(100u64, EIN)
        .returns(ExpectError(4, "Only owners can create proposals"))
        .run();
}

#[test]
fn fetch_active_lists_only_open_proposals() {
    let mut state = funded_daf(1);
    for expected_id in 0..60u64 {
        let id = state.create_out_donation(DAF, OWNERS[0], 1);
        assert_eq!(id, expected_id);
    }
    assert_eq!(active_donations(&mut state).len(), 60);

    for id in [10u64, 20u64] {
        state
            .world
            .tx()
            .from(OWNERS[0])
            .to(DAF)
            .typed(DafFundProxy)
            .revoke(ProposalKind::DonationOut, id)
            .run();
    }

    state.support_all(DAF, &OWNERS[..1], ProposalKind::DonationOut, 30);
    state.set_timestamp(START + DAY);
    fulfill_donation(&mut state, 30);

    let active = active_donations(&mut state);
    assert_eq!(active.len(), 57);
    assert!(active
        .iter()
        .all(|proposal| proposal.id != 10 && proposal.id != 20 && proposal.id != 30));
}

// ============================================================
// Owner changes
// ============================================================

fn create_owner_change(
    state: &mut DafTestState,
    proposer: TestAddress,
    targets: &[TestAddress],
    is_addition: bool,
) -> u64 {
    state
        .world
        .tx()
        .from(proposer)
        .to(DAF)
        .typed(DafFundProxy)
        .create_owner_change(address_vec(targets), is_addition)
        .returns(ReturnsResult)
        .run()
}

fn fulfill_owner_change(state: &mut DafTestState, id: u64) {
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_owner_change(id)
        .run();
}

#[test]
fn owners_can_be_added_and_removed() {
    let mut state = DafTestState::new();
    state.make_daf(DAF_NAME, &[OWNERS[0], OWNERS[1]]);

    let add = create_owner_change(&mut state, OWNERS[0], &[OWNERS[2]], true);
    state.support_all(DAF, &OWNERS[..2], ProposalKind::OwnerChange, add);
    state.set_timestamp(START + DAY);
    fulfill_owner_change(&mut state, add);
    state.lock_voting_tokens(DAF, OWNERS[2], OWNER_WEIGHT);

    assert_eq!(
        state.owners(DAF),
        vec![OWNERS[0].to_address(), OWNERS[1].to_address(), OWNERS[2].to_address()]
    );
    assert_eq!(state.dafs_for_owner(OWNERS[2]), vec![DAF.to_address()]);

    let remove = create_owner_change(&mut state, OWNERS[2], &[OWNERS[1]], false);
    assert_eq!(remove, 1);
    state.support_all(DAF, &[OWNERS[0], OWNERS[2]], ProposalKind::OwnerChange, remove);
    state.set_timestamp(START + 2 * DAY);
    fulfill_owner_change(&mut state, remove);

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .is_owner(OWNERS[1])
        .returns(ExpectValue(false))
        .run();
    assert!(state.dafs_for_owner(OWNERS[1]).is_empty());
    assert_eq!(state.dafs_for_owner(OWNERS[0]), vec![DAF.to_address()]);
}

#[test]
fn owner_change_bounds() {
    let mut state = DafTestState::new();
    state.make_daf(DAF_NAME, &OWNERS[..9]);

    let cases: [(&[TestAddress], bool, &str); 5] = [
        (&[], true, "No owners given"),
        (&[OWNERS[1]], true, "Already an owner"),
        (&[OWNERS[9], OWNERS[9]], true, "Duplicate owner"),
        (&[OWNERS[9], OWNERS[10]], true, "Max 10 owners"),
        (&OWNERS[..9], false, "DAF must keep at least one owner"),
    ];
    for (targets, is_addition, message) in cases {
        state
            .world
            .tx()
            .from(OWNERS[0])
            .to(DAF)
            .typed(DafFundProxy)
            .create_owner_change(address_vec(targets), is_addition)
            .returns(ExpectError(4, message))
            .run();
    }

    state
        .world
        .tx()
        .from(DONOR)
        .to(DAF)
        .typed(DafFundProxy)
        .create_owner_change(address_vec(&[DONOR]), true)
        .returns(ExpectError(4, "Only owners can create proposals"))
        .run();
}

#[test]
fn owner_change_bounds_rechecked_at_fulfillment() {
    let mut state = DafTestState::new();
    state.make_daf(DAF_NAME, &OWNERS[..8]);

    // each fits on its own, together they pass the cap
    let first = create_owner_change(&mut state, OWNERS[0], &[OWNERS[8], OWNERS[9]], true);
    let second = create_owner_change(&mut state, OWNERS[0], &[OWNERS[10]], true);
    state.support_all(DAF, &OWNERS[..8], ProposalKind::OwnerChange, first);
    state.support_all(DAF, &OWNERS[..8], ProposalKind::OwnerChange, second);

    state.set_timestamp(START + DAY);
    fulfill_owner_change(&mut state, first);
    assert_eq!(state.owners(DAF).len(), 10);

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_owner_change(second)
        .returns(ExpectError(4, "Max 10 owners"))
        .run();
    assert!(state.dafs_for_owner(OWNERS[10]).is_empty());
}

#[test]
fn adding_then_removing_an_owner_restores_the_set() {
    let mut state = DafTestState::new();
    state.make_daf(DAF_NAME, &[OWNERS[0], OWNERS[1]]);
    let original = state.owners(DAF);

    let add = create_owner_change(&mut state, OWNERS[0], &[OWNERS[2]], true);
    state.support_all(DAF, &OWNERS[..2], ProposalKind::OwnerChange, add);
    state.set_timestamp(START + DAY);
    fulfill_owner_change(&mut state, add);
    assert_eq!(state.dafs_for_owner(OWNERS[2]), vec![DAF.to_address()]);

    let remove = create_owner_change(&mut state, OWNERS[0], &[OWNERS[2]], false);
    state.support_all(DAF, &OWNERS[..2], ProposalKind::OwnerChange, remove);
    state.set_timestamp(START + 2 * DAY);
    fulfill_owner_change(&mut state, remove);

    assert_eq!(state.owners(DAF), original);
    assert!(state.dafs_for_owner(OWNERS[2]).is_empty());
}

#[test]
fn removed_owner_votes_stop_counting() {
    let mut state = funded_daf(4);
    let donation = state.create_out_donation(DAF, OWNERS[0], 100);
    state.vote(DAF, OWNERS[0], ProposalKind::DonationOut, donation, VoteDirection::Support, 100);

    let removal = create_owner_change(&mut state, OWNERS[1], &[OWNERS[0]], false);
    state.support_all(DAF, &OWNERS[1..4], ProposalKind::OwnerChange, removal);
    state.set_timestamp(START + DAY);
    fulfill_owner_change(&mut state, removal);

    assert_eq!(
        net_votes(&mut state, ProposalKind::DonationOut, donation),
        BigInt::zero()
    );
    let vote = state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .vote_of(ProposalKind::DonationOut, donation, OWNERS[0])
        .returns(ReturnsResult)
        .run()
        .into_option();
    assert!(vote.is_none());

    state.set_timestamp(START + 7 * DAY + 1);
    state
        .world
        .tx()
        .from(OWNERS[1])
        .to(DAF)
        .typed(DafFundProxy)
        .fulfill_donation(donation)
        .returns(ExpectError(4, "Proposal lacks positive support"))
        .run();

    // the former owner takes the lock back out
    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .unlock_voting_tokens(OWNER_WEIGHT)
        .run();
    state
        .world
        .check_account(OWNERS[0])
        .esdt_balance(RILLA, OWNER_RILLA);
}

#[test]
fn unlocked_weight_is_not_counted_twice() {
    let mut state = funded_daf(2);
    let kind = ProposalKind::DonationOut;
    let id = state.create_out_donation(DAF, OWNERS[0], 100);
    state.vote(DAF, OWNERS[0], kind, id, VoteDirection::Support, 100);

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .unlock_voting_tokens(OWNER_WEIGHT)
        .run();
    assert_eq!(net_votes(&mut state, kind, id), BigInt::zero());

    state.lock_voting_tokens(DAF, OWNERS[1], OWNER_WEIGHT);
    state.vote(DAF, OWNERS[1], kind, id, VoteDirection::Support, 200);
    assert_eq!(net_votes(&mut state, kind, id), BigInt::from(200i64));

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .total_voting_weight()
        .returns(ExpectValue(2 * OWNER_WEIGHT))
        .run();
}

// ============================================================
// Voting weight
// ============================================================

#[test]
fn only_owners_lock_the_reward_token() {
    let mut state = DafTestState::new();
    state.make_daf(DAF_NAME, &[ADMIN]);

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .lock_voting_tokens()
        .payment(TestEsdtTransfer(RILLA, 0, 10))
        .returns(ExpectError(4, "Only owners can lock voting tokens"))
        .run();

    state
        .world
        .tx()
        .from(ADMIN)
        .to(DAF)
        .typed(DafFundProxy)
        .lock_voting_tokens()
        .payment(TestEsdtTransfer(STABLE, 0, 10))
        .returns(ExpectError(4, "Only the reward token can be locked"))
        .run();

    state
        .world
        .tx()
        .from(ADMIN)
        .to(DAF)
        .typed(DafFundProxy)
        .unlock_voting_tokens(OWNER_WEIGHT + 1)
        .returns(ExpectError(4, "Invalid unlock amount"))
        .run();

    state
        .world
        .tx()
        .from(DONOR)
        .to(DAF)
        .typed(DafFundProxy)
        .unlock_voting_tokens(1u64)
        .returns(ExpectError(4, "Invalid unlock amount"))
        .run();

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .total_locked()
        .returns(ExpectValue(OWNER_WEIGHT))
        .run();
}

#[test]
fn locked_tokens_are_not_spendable() {
    let mut state = funded_daf(1);
    state.world.check_account(DAF).esdt_balance(RILLA, OWNER_WEIGHT);

    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .balance(EgldOrEsdtTokenIdentifier::<StaticApi>::esdt(
            RILLA.to_token_identifier::<StaticApi>(),
        ))
        .returns(ExpectValue(0u64))
        .run();
    state
        .world
        .query()
        .to(DAF)
        .typed(DafFundProxy)
        .locked_voting_tokens(OWNERS[0])
        .returns(ExpectValue(OWNER_WEIGHT))
        .run();

    state
        .world
        .tx()
        .from(OWNERS[0])
        .to(DAF)
        .typed(DafFundProxy)
        .create_swap(RILLA, STABLE, 50u64)
        .returns(ExpectError(4, "Insufficient token balance"))
        .run();
}
