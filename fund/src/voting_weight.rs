multiversx_sc::imports!();

use daf_common::types::RewardParams;

/// Voting weight is reward token locked into this DAF by an owner. Locks
/// live in the DAF's own storage and are kept apart from the spendable
/// balance.
#[multiversx_sc::module]
pub trait VotingWeightModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry_access::RegistryAccessModule
{
    // ========================================================
    // ENDPOINT: lockVotingTokens
    // ========================================================

    #[payable("*")]
    #[endpoint(lockVotingTokens)]
    fn lock_voting_tokens(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.owners().contains(&caller),
            "Only owners can lock voting tokens"
        );

        let (token, amount) = self.call_value().single_fungible_esdt();
        require!(amount > 0u64, "Amount must be positive");
        let reward_token = self.fetch_reward_params().reward_token;
        require!(token == reward_token, "Only the reward token can be locked");

        if self.total_locked().get() > 0u64 {
            require!(
                self.locked_token().get() == token,
                "Unlock the previous reward token first"
            );
        } else {
            self.locked_token().set(&token);
        }

        self.locked_voting_tokens(&caller).update(|locked| *locked += &amount);
        self.total_locked().update(|total| *total += &amount);

        self.voting_tokens_locked_event(&caller, &token, &amount);
    }

    // ========================================================
    // ENDPOINT: unlockVotingTokens
    // Former owners can still unlock.
    // ========================================================

    #[endpoint(unlockVotingTokens)]
    fn unlock_voting_tokens(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let locked = self.locked_voting_tokens(&caller).get();
        require!(amount > 0u64 && amount <= locked, "Invalid unlock amount");

        let remaining = &locked - &amount;
        if remaining == 0u64 {
            self.locked_voting_tokens(&caller).clear();
        } else {
            self.locked_voting_tokens(&caller).set(&remaining);
        }
        self.total_locked().update(|total| *total -= &amount);

        let token = self.locked_token().get();
        self.send().direct_esdt(&caller, &token, 0, &amount);

        self.voting_tokens_unlocked_event(&caller, &token, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Locked amount in the current reward token. A lock held in a reward
    /// token the registry has since replaced carries no weight.
    fn locked_weight(
        &self,
        owner: &ManagedAddress,
        reward_params: &RewardParams<Self::Api>,
    ) -> BigUint {
        let locked_token = self.locked_token();
        if locked_token.is_empty() || locked_token.get() != reward_params.reward_token {
            return BigUint::zero();
        }
        self.locked_voting_tokens(owner).get()
    }

    /// Weight that counts toward votes and quorum: zero below the minimum.
    fn eligible_weight(
        &self,
        owner: &ManagedAddress,
        reward_params: &RewardParams<Self::Api>,
    ) -> BigUint {
        let locked = self.locked_weight(owner, reward_params);
        if locked >= reward_params.rilla_vote_min {
            locked
        } else {
            BigUint::zero()
        }
    }
}
