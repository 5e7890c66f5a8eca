multiversx_sc::imports!();

use daf_common::types::SwapQuote;

#[multiversx_sc::module]
pub trait QuoteModule: crate::storage::StorageModule {
    /// Runs a quote once, paying `amount_in` of `token_in` to its target,
    /// and returns how much `token_out` arrived. Fails the whole call if the
    /// target fails or delivers less than the quote's declared minimum.
    /// The registry and this DAF itself are never valid targets.
    fn execute_quote(
        &self,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
        token_out: &TokenIdentifier,
        quote: SwapQuote<Self::Api>,
    ) -> BigUint {
        require!(*amount_in > 0u64, "Amount must be positive");
        require!(
            quote.target != self.registry().get()
                && quote.target != self.blockchain().get_sc_address(),
            "Invalid quote target"
        );
        let balance_before = self.own_balance(token_out);

        let mut arguments = ManagedArgBuffer::new();
        for argument in quote.arguments.iter() {
            arguments.push_arg_raw(argument.clone_value());
        }

        self.tx()
            .to(&quote.target)
            .raw_call(quote.endpoint)
            .arguments_raw(arguments)
            .payment(EgldOrEsdtTokenPayment::new(
                token_in.clone(),
                0,
                amount_in.clone(),
            ))
            .sync_call();

        let balance_after = self.own_balance(token_out);
        require!(
            balance_after >= balance_before,
            "Swap output below quote minimum"
        );
        let received = balance_after - balance_before;
        require!(
            received >= quote.min_amount_out,
            "Swap output below quote minimum"
        );
        received
    }

    /// Balance held for the DAF itself, excluding locked voting tokens.
    fn own_balance(&self, token: &TokenIdentifier) -> BigUint {
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token.clone()), 0);
        let locked_token = self.locked_token();
        if locked_token.is_empty() || locked_token.get() != *token {
            return balance;
        }
        balance - self.total_locked().get()
    }
}
