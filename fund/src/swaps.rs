multiversx_sc::imports!();

use daf_common::{
    governance::bps_share,
    types::{Proposal, ProposalAction, ProposalKind, SwapQuote},
};

#[multiversx_sc::module]
pub trait SwapsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::registry_access::RegistryAccessModule
    + crate::quote::QuoteModule
    + crate::voting_weight::VotingWeightModule
    + crate::engine::ProposalEngineModule
{
    #[endpoint(createSwap)]
    fn create_swap(
        &self,
        token_in: TokenIdentifier,
        token_out: TokenIdentifier,
        amount_in: BigUint,
    ) -> u64 {
        let caller = self.require_caller_owner("Only owners can create proposals");
        require!(token_in != token_out, "Swap tokens must differ");
        require!(amount_in > 0u64, "Amount must be positive");
        require!(
            self.own_balance(&token_in) >= amount_in,
            "Insufficient token balance"
        );

        self.create_proposal(
            &caller,
            ProposalAction::Swap {
                token_in,
                token_out,
                amount_in,
            },
        )
    }

    /// The swap fee is taken from the input side. When the input is not the
    /// stable token the fee slice is sold through `fee_quote` first; the
    /// primary quote then sells `amount_in - fee`.
    #[endpoint(fulfillSwap)]
    fn fulfill_swap(
        &self,
        id: u64,
        swap_quote: SwapQuote<Self::Api>,
        fee_quote: OptionalValue<SwapQuote<Self::Api>>,
    ) {
        let proposal = self.begin_fulfillment(ProposalKind::Swap, id);
        let (token_in, token_out, amount_in) = match proposal.action {
            ProposalAction::Swap {
                token_in,
                token_out,
                amount_in,
            } => (token_in, token_out, amount_in),
            _ => sc_panic!("Wrong proposal kind"),
        };
        require!(
            self.own_balance(&token_in) >= amount_in,
            "Insufficient token balance"
        );

        let input = EgldOrEsdtTokenIdentifier::esdt(token_in.clone());
        let fee_params = self.fetch_fee_params();
        let fee = bps_share(&amount_in, fee_params.fee_swap_bps);

        if fee > 0u64 {
            let stable_token = self.fetch_stable_token();
            let fee_in_stable = if token_in == stable_token {
                fee.clone()
            } else {
                let fee_quote = match fee_quote.into_option() {
                    Some(quote) => quote,
                    None => sc_panic!("Fee quote required"),
                };
                self.execute_quote(&input, &fee, &stable_token, fee_quote)
            };
            if fee_in_stable > 0u64 {
                let fee_address = self.fetch_fee_address();
                self.send()
                    .direct_esdt(&fee_address, &stable_token, 0, &fee_in_stable);
            }
        }

        let net_in = &amount_in - &fee;
        require!(net_in > 0u64, "Nothing left after fee");
        let amount_out = self.execute_quote(&input, &net_in, &token_out, swap_quote);

        self.swap_executed_event(id, &token_in, &token_out, &amount_out);
    }

    #[view(fetchActiveSwaps)]
    fn fetch_active_swaps(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.active_proposals(ProposalKind::Swap)
    }
}
