multiversx_sc::imports!();

/// Donor rewards are paid out of reward tokens deposited here. The registry
/// never mints.
#[multiversx_sc::module]
pub trait RewardsModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::factory::FactoryModule
{
    #[payable("*")]
    #[endpoint(depositRewards)]
    fn deposit_rewards(&self) {
        let (token, amount) = self.call_value().single_fungible_esdt();
        require!(
            token == self.reward_token().get(),
            "Only the reward token can be deposited"
        );
        require!(amount > 0u64, "Amount must be positive");

        let caller = self.blockchain().get_caller();
        self.rewards_deposited_event(&caller, &amount);
    }

    /// Called by a DAF when it receives a donation. Pays
    /// `stable_amount * rillaSwapRate`, capped by the reserve, and returns
    /// what was paid. Pays nothing while rewards are switched off.
    #[endpoint(issueDonationReward)]
    fn issue_donation_reward(&self, donor: ManagedAddress, stable_amount: BigUint) -> BigUint {
        let daf = self.require_caller_daf();
        if !self.rewards_live().get() {
            return BigUint::zero();
        }

        let reserve = self.reward_reserve();
        let mut reward = &stable_amount * &self.rilla_swap_rate().get();
        if reward > reserve {
            reward = reserve;
        }
        if reward == 0u64 {
            return reward;
        }

        let reward_token = self.reward_token().get();
        self.send().direct_esdt(&donor, &reward_token, 0, &reward);
        self.reward_issued_event(&donor, &daf, &reward);

        reward
    }
}
