multiversx_sc::imports!();

use daf_common::{
    governance::bps_share,
    types::{Proposal, ProposalAction, ProposalKind, SwapQuote},
};

#[multiversx_sc::module]
pub trait DonationsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry_access::RegistryAccessModule
    + crate::quote::QuoteModule
    + crate::voting_weight::VotingWeightModule
    + crate::engine::ProposalEngineModule
{
    // ========================================================
    // Inbound: anyone can donate. Non-stable assets are sold
    // into the stable token through the supplied quote.
    // ========================================================

    #[payable("*")]
    #[endpoint(donateToDaf)]
    fn donate_to_daf(&self, quote: OptionalValue<SwapQuote<Self::Api>>) {
        let (token, amount) = self.call_value().single_fungible_esdt();
        self.receive_donation(
            EgldOrEsdtTokenIdentifier::esdt(token),
            amount,
            quote.into_option(),
        );
    }

    #[payable("EGLD")]
    #[endpoint(donateEgldToDaf)]
    fn donate_egld_to_daf(&self, quote: SwapQuote<Self::Api>) {
        let amount = self.call_value().egld_value().clone_value();
        self.receive_donation(EgldOrEsdtTokenIdentifier::egld(), amount, Some(quote));
    }

    fn receive_donation(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        quote: Option<SwapQuote<Self::Api>>,
    ) {
        require!(amount > 0u64, "Amount must be positive");
        let donor = self.blockchain().get_caller();
        let stable_token = self.fetch_stable_token();

        let stable_amount = if token == EgldOrEsdtTokenIdentifier::esdt(stable_token.clone()) {
            require!(quote.is_none(), "Unexpected quote for stable donation");
            amount.clone()
        } else {
            let quote = match quote {
                Some(quote) => quote,
                None => sc_panic!("Quote required for non-stable donation"),
            };
            self.execute_quote(&token, &amount, &stable_token, quote)
        };

        let fee_params = self.fetch_fee_params();
        let fee = bps_share(&stable_amount, fee_params.fee_in_bps);
        if fee > 0u64 {
            let fee_address = self.fetch_fee_address();
            self.send().direct_esdt(&fee_address, &stable_token, 0, &fee);
        }
        let credited = &stable_amount - &fee;

        // Rewards follow the donated value, before the fee.
        let reward = self.request_donation_reward(&donor, &stable_amount);

        self.donation_received_event(&donor, &token, &amount, &credited, &reward);
    }

    // ========================================================
    // Outbound: owners vote to send stable funds to a charity
    // ========================================================

    #[endpoint(createOutDonation)]
    fn create_out_donation(&self, amount: BigUint, ein: ManagedBuffer) -> u64 {
        let caller = self.require_caller_owner("Only owners can create proposals");
        require!(amount > 0u64, "Amount must be positive");
        self.require_accepted_charity(&ein);

        let stable_token = self.fetch_stable_token();
        require!(
            self.own_balance(&stable_token) >= amount,
            "Insufficient stable balance"
        );

        self.create_proposal(&caller, ProposalAction::DonationOut { amount, ein })
    }

    /// Sends the donation, minus the outbound fee, to the registry payout
    /// queue. Charity acceptance and balance are checked again here.
    #[endpoint(fulfillDonation)]
    fn fulfill_donation(&self, id: u64) {
        let proposal = self.begin_fulfillment(ProposalKind::DonationOut, id);
        let (amount, ein) = match proposal.action {
            ProposalAction::DonationOut { amount, ein } => (amount, ein),
            _ => sc_panic!("Wrong proposal kind"),
        };

        self.require_accepted_charity(&ein);
        let stable_token = self.fetch_stable_token();
        require!(
            self.own_balance(&stable_token) >= amount,
            "Insufficient stable balance"
        );

        let fee_params = self.fetch_fee_params();
        let fee = bps_share(&amount, fee_params.fee_out_bps);
        let net_amount = &amount - &fee;
        require!(net_amount > 0u64, "Nothing left after fee");

        if fee > 0u64 {
            let fee_address = self.fetch_fee_address();
            self.send().direct_esdt(&fee_address, &stable_token, 0, &fee);
        }
        let queue_id = self.queue_donation_at_registry(id, &ein, &stable_token, &net_amount);

        self.donation_sent_event(id, &ein, queue_id, &net_amount);
    }

    #[view(fetchActiveDonations)]
    fn fetch_active_donations(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.active_proposals(ProposalKind::DonationOut)
    }
}
