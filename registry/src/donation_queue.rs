multiversx_sc::imports!();

use daf_common::types::QueuedDonation;

/// Outbound donations wait here, in the stable token, until the admin pays
/// them out to the treasury in batches.
#[multiversx_sc::module]
pub trait DonationQueueModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::factory::FactoryModule
{
    #[payable("*")]
    #[endpoint(queueDonation)]
    fn queue_donation(&self, fund_proposal_id: u64, ein: ManagedBuffer) -> u64 {
        let fund = self.require_caller_daf();
        let (token, amount) = self.call_value().single_fungible_esdt();
        require!(
            token == self.stable_token().get(),
            "Donations must be paid in the stable token"
        );
        require!(amount > 0u64, "Amount must be positive");

        let id = self.donation_queue_length().get();
        let donation = QueuedDonation {
            id,
            fund: fund.clone(),
            fund_proposal_id,
            ein,
            amount,
            fulfilled: false,
        };
        self.queued_donations(id).set(&donation);
        self.donation_queue_length().set(id + 1);
        self.unfulfilled_donation_count().update(|count| *count += 1);

        self.donation_queued_event(id, &fund, &donation.ein, &donation.amount);
        id
    }

    /// All or nothing: one bad id reverts the whole batch.
    #[only_owner]
    #[endpoint(fulfillDonations)]
    fn fulfill_donations(&self, ids: MultiValueEncoded<u64>) {
        let queue_length = self.donation_queue_length().get();
        let mut total = BigUint::zero();
        let mut fulfilled_count = 0u64;

        for id in ids {
            require!(id < queue_length, "Invalid donation id");
            let mut donation = self.queued_donations(id).get();
            require!(!donation.fulfilled, "Donation already fulfilled");

            donation.fulfilled = true;
            self.queued_donations(id).set(&donation);
            total += &donation.amount;
            fulfilled_count += 1;

            self.donation_fulfilled_event(id, &donation.fund, &donation.amount);
        }

        self.unfulfilled_donation_count()
            .update(|count| *count -= fulfilled_count);

        if total > 0u64 {
            let treasury = self.treasury_address().get();
            let stable_token = self.stable_token().get();
            self.send().direct_esdt(&treasury, &stable_token, 0, &total);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getUnfulfilledDonations)]
    fn get_unfulfilled_donations(&self) -> MultiValueEncoded<QueuedDonation<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for id in 0..self.donation_queue_length().get() {
            let donation = self.queued_donations(id).get();
            if !donation.fulfilled {
                result.push(donation);
            }
        }
        result
    }

    #[view(getQueuedDonation)]
    fn get_queued_donation(&self, id: u64) -> QueuedDonation<Self::Api> {
        require!(
            id < self.donation_queue_length().get(),
            "Invalid donation id"
        );
        self.queued_donations(id).get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getDonationQueueLength)]
    #[storage_mapper("donationQueueLength")]
    fn donation_queue_length(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("queuedDonations")]
    fn queued_donations(&self, id: u64) -> SingleValueMapper<QueuedDonation<Self::Api>>;
}
