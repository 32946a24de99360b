use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct MarketplaceCreated {
    pub marketplace: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct MarketplaceMintUpdated {
    pub marketplace: Pubkey,
    pub mint: Pubkey,
    pub escrow: Pubkey,
}

#[event]
pub struct CollectionCreated {
    pub collection: Pubkey,
    pub marketplace: Pubkey,
    pub symbol: String,
    pub required_verifier: Pubkey,
}

#[event]
pub struct SellOrderCreated {
    pub sell_order: Pubkey,
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub price: u64,
    pub quantity: u64,
}

#[event]
pub struct SellOrderQuantityAdded {
    pub sell_order: Pubkey,
    pub quantity_added: u64,
    pub quantity: u64,
}

#[event]
pub struct SellOrderRemoved {
    pub sell_order: Pubkey,
    pub quantity_unlisted: u64,
    pub quantity: u64,
}

/// One fill per consumed order during `buy`.
#[event]
pub struct SellOrderFilled {
    pub sell_order: Pubkey,
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub quantity: u64,
    pub price: u64,
}

#[event]
pub struct BuyOfferCreated {
    pub buy_offer: Pubkey,
    pub mint: Pubkey,
    pub buyer: Pubkey,
    pub proposed_price: u64,
}

#[event]
pub struct BuyOfferRemoved {
    pub buy_offer: Pubkey,
    pub refund: u64,
}

#[event]
pub struct BuyOfferExecuted {
    pub buy_offer: Pubkey,
    pub mint: Pubkey,
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub price: u64,
}
