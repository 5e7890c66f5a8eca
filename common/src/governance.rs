use multiversx_sc::{api::ManagedTypeApi, types::BigUint};

use crate::types::TimeParams;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Hard ceiling on the owner set of a single DAF
pub const MAX_OWNERS: usize = 10;

pub const DEFAULT_INTERIM_WAIT_TIME: u64 = 86_400;
pub const DEFAULT_WAIT_TIME: u64 = 7 * 86_400;
pub const DEFAULT_EXPIRE_TIME: u64 = 30 * 86_400;

/// Where a proposal stands against the time windows and its tally.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Maturity {
    /// Interim window still running; the tally is irrelevant.
    TooEarly,
    Expired,
    /// Past the interim window but short of majority and of the wait time.
    NeedsMajority,
    /// Past the wait time but net support is not positive.
    NeedsSupport,
    Ready,
}

pub fn bps_share<M: ManagedTypeApi>(amount: &BigUint<M>, bps: u64) -> BigUint<M> {
    amount * bps / BPS_DENOMINATOR
}

/// Net support strictly above half of the eligible weight.
pub fn has_majority<M: ManagedTypeApi>(
    support: &BigUint<M>,
    objection: &BigUint<M>,
    total_weight: &BigUint<M>,
) -> bool {
    if support <= objection {
        return false;
    }
    let net = support - objection;
    net * 2u64 > *total_weight
}

pub fn maturity<M: ManagedTypeApi>(
    elapsed: u64,
    times: &TimeParams,
    support: &BigUint<M>,
    objection: &BigUint<M>,
    total_weight: &BigUint<M>,
) -> Maturity {
    if elapsed < times.interim_wait_time {
        return Maturity::TooEarly;
    }
    if elapsed >= times.expire_time {
        return Maturity::Expired;
    }
    if has_majority(support, objection, total_weight) {
        return Maturity::Ready;
    }
    if elapsed < times.wait_time {
        return Maturity::NeedsMajority;
    }
    if support > objection {
        Maturity::Ready
    } else {
        Maturity::NeedsSupport
    }
}
