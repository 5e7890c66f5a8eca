#![allow(dead_code)]

use daf_common::{
    fund_proxy::DafFundProxy,
    registry_proxy::DafRegistryProxy,
    types::{ProposalKind, SwapQuote, VoteDirection},
};
use mock_swap::mock_swap_proxy::MockSwapProxy;
use multiversx_sc_scenario::imports::*;

pub const ADMIN: TestAddress = TestAddress::new("admin");
pub const FEE_COLLECTOR: TestAddress = TestAddress::new("fee-collector");
pub const TREASURY: TestAddress = TestAddress::new("treasury");
pub const DONOR: TestAddress = TestAddress::new("donor");
/// Owner that never locks reward tokens
pub const LURKER: TestAddress = TestAddress::new("lurker");
pub const OWNERS: [TestAddress; 11] = [
    TestAddress::new("owner-00"),
    TestAddress::new("owner-01"),
    TestAddress::new("owner-02"),
    TestAddress::new("owner-03"),
    TestAddress::new("owner-04"),
    TestAddress::new("owner-05"),
    TestAddress::new("owner-06"),
    TestAddress::new("owner-07"),
    TestAddress::new("owner-08"),
    TestAddress::new("owner-09"),
    TestAddress::new("owner-10"),
];

pub const REGISTRY: TestSCAddress = TestSCAddress::new("registry");
pub const FUND_TEMPLATE: TestSCAddress = TestSCAddress::new("fund-template");
pub const MOCK_SWAP: TestSCAddress = TestSCAddress::new("mock-swap");
pub const DAF_NAME: &str = "daf";
pub const SECOND_DAF_NAME: &str = "second-daf";
pub const DAF: TestSCAddress = TestSCAddress::new(DAF_NAME);
pub const SECOND_DAF: TestSCAddress = TestSCAddress::new(SECOND_DAF_NAME);

pub const REGISTRY_CODE: MxscPath = MxscPath::new("output/daf-registry.mxsc.json");
pub const FUND_CODE: MxscPath = MxscPath::new("../fund/output/daf-fund.mxsc.json");
pub const MOCK_SWAP_CODE: MxscPath = MxscPath::new("../mock-swap/output/mock-swap.mxsc.json");

pub const STABLE: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const RILLA: TestTokenIdentifier = TestTokenIdentifier::new("RILLA-123456");
pub const DAI: TestTokenIdentifier = TestTokenIdentifier::new("DAI-123456");

pub const EIN: &str = "12-3456789";
pub const OTHER_EIN: &str = "98-7654321";

pub const DAY: u64 = 86_400;
pub const START: u64 = 1_000_000;
/// Reward tokens every owner in `OWNERS` locks into each DAF they join
pub const OWNER_WEIGHT: u64 = 100;
/// Reward-token wallet of every owner in `OWNERS`
pub const OWNER_RILLA: u64 = 10 * OWNER_WEIGHT;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.set_current_dir_from_workspace("registry");

    blockchain.register_contract(REGISTRY_CODE, daf_registry::ContractBuilder);
    blockchain.register_contract(FUND_CODE, daf_fund::ContractBuilder);
    blockchain.register_contract(MOCK_SWAP_CODE, mock_swap::ContractBuilder);
    blockchain
}

pub fn owner_list(
    owners: &[TestAddress],
) -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    let mut list = MultiValueEncoded::new();
    for owner in owners {
        list.push(owner.to_managed_address());
    }
    list
}

pub fn donation_ids(ids: &[u64]) -> MultiValueEncoded<StaticApi, u64> {
    let mut list = MultiValueEncoded::new();
    for id in ids {
        list.push(*id);
    }
    list
}

pub fn address_vec(owners: &[TestAddress]) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut list = ManagedVec::new();
    for owner in owners {
        list.push(owner.to_managed_address());
    }
    list
}

/// Quote that makes the mock exchange pay back exactly `amount_out`.
pub fn mock_quote(
    token_out: TestTokenIdentifier,
    amount_out: u64,
    min_amount_out: u64,
) -> SwapQuote<StaticApi> {
    let mut arguments = ManagedVec::new();
    arguments.push(token_out.to_token_identifier::<StaticApi>().into_managed_buffer());
    arguments.push(BigUint::<StaticApi>::from(amount_out).to_bytes_be_buffer());

    SwapQuote {
        target: MOCK_SWAP.to_managed_address(),
        endpoint: ManagedBuffer::from("swap"),
        arguments,
        min_amount_out: BigUint::from(min_amount_out),
    }
}

pub struct DafTestState {
    pub world: ScenarioWorld,
    registry_deploys: u64,
}

impl DafTestState {
    /// Template, registry and a stocked mock exchange, with the clock at
    /// `START`. No DAF exists yet.
    pub fn new() -> Self {
        let mut world = world();

        world
            .account(ADMIN)
            .nonce(1)
            .esdt_balance(STABLE, 10_000_000u64)
            .esdt_balance(DAI, 10_000_000u64)
            .esdt_balance(RILLA, 10_000_000u64);
        world
            .account(DONOR)
            .nonce(1)
            .balance(1_000_000u64)
            .esdt_balance(STABLE, 1_000_000u64)
            .esdt_balance(DAI, 1_000_000u64);
        world.account(FEE_COLLECTOR).nonce(1);
        world.account(TREASURY).nonce(1);
        world.account(LURKER).nonce(1);
        for owner in OWNERS {
            world
                .account(owner)
                .nonce(1)
                .esdt_balance(RILLA, OWNER_RILLA);
        }
        world.current_block().block_timestamp(START);

        world
            .tx()
            .from(ADMIN)
            .typed(DafFundProxy)
            .init("template", owner_list(&[ADMIN]))
            .code(FUND_CODE)
            .new_address(FUND_TEMPLATE)
            .run();

        world
            .tx()
            .from(ADMIN)
            .typed(DafRegistryProxy)
            .init(FUND_TEMPLATE, STABLE, RILLA, FEE_COLLECTOR, TREASURY)
            .code(REGISTRY_CODE)
            .new_address(REGISTRY)
            .run();

        world
            .tx()
            .from(ADMIN)
            .typed(MockSwapProxy)
            .init()
            .code(MOCK_SWAP_CODE)
            .new_address(MOCK_SWAP)
            .run();

        for token in [STABLE, DAI] {
            world
                .tx()
                .from(ADMIN)
                .to(MOCK_SWAP)
                .typed(MockSwapProxy)
                .deposit()
                .payment(TestEsdtTransfer(token, 0, 1_000_000))
                .run();
        }

        Self {
            world,
            registry_deploys: 0,
        }
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // ========================================================
    // Registry
    // ========================================================

    /// Creates a DAF at `sc:{address_name}`, called by the first owner.
    /// Every owner except `LURKER` then locks `OWNER_WEIGHT`.
    pub fn make_daf(&mut self, address_name: &str, owners: &[TestAddress]) {
        self.world.set_state_step(SetStateStep::new().new_address(
            "sc:registry",
            self.registry_deploys,
            format!("sc:{address_name}").as_str(),
        ));

        let new_daf = self
            .world
            .tx()
            .from(owners[0])
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .make_daf("Test", owner_list(owners))
            .returns(ReturnsResult)
            .run();
        assert_eq!(
            new_daf.to_address(),
            TestSCAddress::new(address_name).to_address()
        );

        self.registry_deploys += 1;

        let daf = TestSCAddress::new(address_name);
        for owner in owners {
            if *owner != LURKER {
                self.lock_voting_tokens(daf, *owner, OWNER_WEIGHT);
            }
        }
    }

    pub fn modify_charities(&mut self, changes: &[(&str, bool)]) {
        let mut eins = ManagedVec::<StaticApi, ManagedBuffer<StaticApi>>::new();
        let mut accepted = ManagedVec::<StaticApi, bool>::new();
        for (ein, is_accepted) in changes {
            eins.push(ManagedBuffer::from(*ein));
            accepted.push(*is_accepted);
        }

        self.world
            .tx()
            .from(ADMIN)
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .modify_charities(eins, accepted)
            .run();
    }

    pub fn set_fee_in_bps(&mut self, bps: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .set_fee_in_bps(bps)
            .run();
    }

    pub fn set_fee_out_bps(&mut self, bps: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .set_fee_out_bps(bps)
            .run();
    }

    pub fn set_fee_swap_bps(&mut self, bps: u64) {
        self.world
            .tx()
            .from(ADMIN)
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .set_fee_swap_bps(bps)
            .run();
    }

    pub fn dafs_for_owner(&mut self, owner: TestAddress) -> Vec<Address> {
        let dafs: MultiValueVec<Address> = self
            .world
            .query()
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .dafs_for_owner(owner)
            .returns(ReturnsResultUnmanaged)
            .run();
        dafs.into_vec()
    }

    pub fn unfulfilled_donation_count(&mut self) -> u64 {
        self.world
            .query()
            .to(REGISTRY)
            .typed(DafRegistryProxy)
            .unfulfilled_donation_count()
            .returns(ReturnsResult)
            .run()
    }

    // ========================================================
    // DAF
    // ========================================================

    pub fn lock_voting_tokens(&mut self, daf: TestSCAddress, owner: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(owner)
            .to(daf)
            .typed(DafFundProxy)
            .lock_voting_tokens()
            .payment(TestEsdtTransfer(RILLA, 0, amount))
            .run();
    }

    pub fn donate_stable(&mut self, daf: TestSCAddress, amount: u64) {
        self.world
            .tx()
            .from(DONOR)
            .to(daf)
            .typed(DafFundProxy)
            .donate_to_daf(OptionalValue::<SwapQuote<StaticApi>>::None)
            .payment(TestEsdtTransfer(STABLE, 0, amount))
            .run();
    }

    pub fn create_out_donation(
        &mut self,
        daf: TestSCAddress,
        proposer: TestAddress,
        amount: u64,
    ) -> u64 {
        self.world
            .tx()
            .from(proposer)
            .to(daf)
            .typed(DafFundProxy)
            .create_out_donation(amount, EIN)
            .returns(ReturnsResult)
            .run()
    }

    pub fn vote(
        &mut self,
        daf: TestSCAddress,
        voter: TestAddress,
        kind: ProposalKind,
        id: u64,
        direction: VoteDirection,
        weight: u64,
    ) {
        self.world
            .tx()
            .from(voter)
            .to(daf)
            .typed(DafFundProxy)
            .vote(kind, id, direction, weight)
            .run();
    }

    /// Every listed owner supports with their full weight.
    pub fn support_all(
        &mut self,
        daf: TestSCAddress,
        voters: &[TestAddress],
        kind: ProposalKind,
        id: u64,
    ) {
        for voter in voters {
            self.vote(daf, *voter, kind, id, VoteDirection::Support, OWNER_WEIGHT);
        }
    }

    pub fn proposal_fulfilled(&mut self, daf: TestSCAddress, kind: ProposalKind, id: u64) -> bool {
        let proposal = self
            .world
            .query()
            .to(daf)
            .typed(DafFundProxy)
            .proposal(kind, id)
            .returns(ReturnsResult)
            .run();
        proposal.fulfilled
    }

    pub fn owners(&mut self, daf: TestSCAddress) -> Vec<Address> {
        let owners: MultiValueVec<Address> = self
            .world
            .query()
            .to(daf)
            .typed(DafFundProxy)
            .owners()
            .returns(ReturnsResultUnmanaged)
            .run();
        owners.into_vec()
    }
}
