#![no_std]

multiversx_sc::imports!();

pub mod donations;
pub mod engine;
pub mod events;
pub mod owners;
pub mod quote;
pub mod registry_access;
pub mod storage;
pub mod swaps;
pub mod voting_weight;

use daf_common::governance::MAX_OWNERS;

// ============================================================
// Contract
// ============================================================

/// A donor-advised fund: a small owner set that votes, weighted by reward
/// token balance, on outbound donations, swaps and owner changes. Deployed
/// by the registry, which supplies fees, time windows and charity checks.
#[multiversx_sc::contract]
pub trait DafFund:
    storage::StorageModule
    + events::EventsModule
    + registry_access::RegistryAccessModule
    + quote::QuoteModule
    + voting_weight::VotingWeightModule
    + engine::ProposalEngineModule
    + donations::DonationsModule
    + swaps::SwapsModule
    + owners::OwnersModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// The deployer becomes the registry this DAF reports to.
    #[init]
    fn init(&self, name: ManagedBuffer, owners: MultiValueEncoded<ManagedAddress>) {
        let owner_count = owners.len();
        require!(owner_count > 0, "DAF needs at least one owner");
        require!(owner_count <= MAX_OWNERS, "Max 10 owners");

        for owner in owners {
            require!(self.owners().insert(owner), "Duplicate owner");
        }

        self.name().set(&name);
        self.registry().set(self.blockchain().get_caller());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getOwners)]
    fn get_owners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for owner in self.owners().iter() {
            result.push(owner);
        }
        result
    }

    #[view(isOwner)]
    fn is_owner(&self, address: ManagedAddress) -> bool {
        self.owners().contains(&address)
    }

    /// Spendable balance; locked voting tokens are left out.
    #[view(getBalance)]
    fn get_balance(&self, token: EgldOrEsdtTokenIdentifier) -> BigUint {
        match token.as_esdt_option() {
            Some(esdt) => self.own_balance(&esdt),
            None => self.blockchain().get_sc_balance(&token, 0),
        }
    }
}
