multiversx_sc::imports!();

use daf_common::{
    governance::MAX_OWNERS,
    types::{Proposal, ProposalAction, ProposalKind},
};

#[multiversx_sc::module]
pub trait OwnersModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry_access::RegistryAccessModule
    + crate::voting_weight::VotingWeightModule
    + crate::engine::ProposalEngineModule
{
    /// One direction for the whole batch of targets.
    #[endpoint(createOwnerChange)]
    fn create_owner_change(&self, targets: ManagedVec<ManagedAddress>, is_addition: bool) -> u64 {
        let caller = self.require_caller_owner("Only owners can create proposals");
        require!(!targets.is_empty(), "No owners given");
        require!(targets.len() <= MAX_OWNERS, "Max 10 owners");
        self.require_distinct(&targets);

        if is_addition {
            for target in targets.iter() {
                require!(!self.owners().contains(&target), "Already an owner");
            }
            require!(
                self.owners().len() + targets.len() <= MAX_OWNERS,
                "Max 10 owners"
            );
        } else {
            let removed = targets
                .iter()
                .filter(|target| self.owners().contains(target))
                .count();
            require!(
                removed < self.owners().len(),
                "DAF must keep at least one owner"
            );
        }

        self.create_proposal(
            &caller,
            ProposalAction::OwnerChange {
                targets,
                is_addition,
            },
        )
    }

    /// Adding a present owner or removing an absent one is a no-op. Bounds
    /// are checked on the resulting set. Removed owners lose their votes;
    /// their locked tokens stay unlockable.
    #[endpoint(fulfillOwnerChange)]
    fn fulfill_owner_change(&self, id: u64) {
        let proposal = self.begin_fulfillment(ProposalKind::OwnerChange, id);
        let (targets, is_addition) = match proposal.action {
            ProposalAction::OwnerChange {
                targets,
                is_addition,
            } => (targets, is_addition),
            _ => sc_panic!("Wrong proposal kind"),
        };

        let mut changed = MultiValueEncoded::new();
        if is_addition {
            for target in targets.iter() {
                let target = target.clone_value();
                if self.owners().insert(target.clone()) {
                    changed.push(target);
                }
            }
            require!(self.owners().len() <= MAX_OWNERS, "Max 10 owners");
        } else {
            for target in targets.iter() {
                if self.owners().remove(&target) {
                    self.clear_votes_of(&target);
                    changed.push(target.clone_value());
                }
            }
            require!(
                !self.owners().is_empty(),
                "DAF must keep at least one owner"
            );
        }

        if !changed.is_empty() {
            self.record_owner_change_at_registry(is_addition, changed);
        }

        self.owners_changed_event(id, is_addition, self.owners().len() as u64);
    }

    #[view(fetchActiveOwnerChanges)]
    fn fetch_active_owner_changes(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.active_proposals(ProposalKind::OwnerChange)
    }

    fn require_distinct(&self, addresses: &ManagedVec<ManagedAddress>) {
        for (index, address) in addresses.iter().enumerate() {
            for other in addresses.iter().skip(index + 1) {
                require!(*address != *other, "Duplicate owner");
            }
        }
    }
}
