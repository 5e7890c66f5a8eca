multiversx_sc::imports!();

use daf_common::{fund_proxy::DafFundProxy, governance::MAX_OWNERS};

#[multiversx_sc::module]
pub trait FactoryModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: makeDaf
    // Anyone can create a DAF. The new contract is a copy of the
    // template code and treats this registry as its registry.
    // Payable by contracts so swap targets can pay it out.
    // ========================================================

    #[endpoint(makeDaf)]
    fn make_daf(
        &self,
        name: ManagedBuffer,
        owners: MultiValueEncoded<ManagedAddress>,
    ) -> ManagedAddress {
        let owners = owners.to_vec();
        require!(!owners.is_empty(), "DAF needs at least one owner");
        require!(owners.len() <= MAX_OWNERS, "Max 10 owners");
        for (index, owner) in owners.iter().enumerate() {
            for other in owners.iter().skip(index + 1) {
                require!(*owner != *other, "Duplicate owner");
            }
        }

        let mut init_owners = MultiValueEncoded::new();
        for owner in owners.iter() {
            init_owners.push(owner.clone_value());
        }

        let template = self.daf_implementation().get();
        let new_daf = self
            .tx()
            .typed(DafFundProxy)
            .init(&name, init_owners)
            .from_source(template)
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.dafs().insert(new_daf.clone());
        for owner in owners.iter() {
            self.dafs_by_owner(&owner).insert(new_daf.clone());
        }

        let creator = self.blockchain().get_caller();
        self.new_daf_event(&new_daf, &creator, &name);

        new_daf
    }

    // ========================================================
    // ENDPOINT: recordOwnerChange
    // Keeps the owner index in step with a DAF's owner set.
    // ========================================================

    #[endpoint(recordOwnerChange)]
    fn record_owner_change(&self, is_addition: bool, owners: MultiValueEncoded<ManagedAddress>) {
        let daf = self.require_caller_daf();
        for owner in owners {
            if is_addition {
                self.dafs_by_owner(&owner).insert(daf.clone());
            } else {
                self.dafs_by_owner(&owner).swap_remove(&daf);
            }
        }
    }

    fn require_caller_daf(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.dafs().contains(&caller), "Caller is not a registered DAF");
        caller
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDafsForOwner)]
    fn get_dafs_for_owner(&self, owner: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for daf in self.dafs_by_owner(&owner).iter() {
            result.push(daf);
        }
        result
    }

    #[view(getDafs)]
    fn get_dafs(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for daf in self.dafs().iter() {
            result.push(daf);
        }
        result
    }

    #[view(isDaf)]
    fn is_daf(&self, address: ManagedAddress) -> bool {
        self.dafs().contains(&address)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("dafs")]
    fn dafs(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("dafsByOwner")]
    fn dafs_by_owner(&self, owner: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
