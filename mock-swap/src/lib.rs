#![no_std]

multiversx_sc::imports!();

pub mod mock_swap_proxy;

/// Stand-in exchange for exercising swap quotes. Takes any single payment and
/// pays the caller back whatever output the quote names, out of its reserves.
#[multiversx_sc::contract]
pub trait MockSwap {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Funds the reserves.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {}

    #[payable("*")]
    #[endpoint(swap)]
    fn swap(&self, token_out: TokenIdentifier, amount_out: BigUint) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0u64, "Nothing to swap");
        require!(
            self.blockchain()
                .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_out.clone()), 0)
                >= amount_out,
            "Insufficient reserves"
        );

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .single_esdt(&token_out, 0, &amount_out)
            .transfer();
    }
}
