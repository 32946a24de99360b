use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod royalties;
pub mod state;

use instructions::*;

declare_id!("7wcrtE4WmnAFg4fbjrrFnohC1xzL9FnYY3qwuf66PbQg");

#[program]
pub mod souk {
    use super::*;

    // ──────────────────────────────────────────────────────
    // MARKETPLACE REGISTRY
    // ──────────────────────────────────────────────────────

    /// Create the marketplace registry and its escrow vault for the
    /// settlement mint. One registry per creating wallet.
    pub fn create_marketplace(
        ctx: Context<CreateMarketplace>,
        fee_bps: u16,
        fee_destination: Pubkey,
    ) -> Result<()> {
        instructions::create_marketplace::handler(ctx, fee_bps, fee_destination)
    }

    /// Update fee rate, fee destination, or authority. Authority only.
    /// All fields are optional — pass None to keep current value.
    pub fn update_marketplace(
        ctx: Context<UpdateMarketplace>,
        update: MarketplaceUpdate,
    ) -> Result<()> {
        instructions::update_marketplace::handler(ctx, update)
    }

    /// Switch the settlement mint and derive the escrow vault for it.
    /// The old vault is left in place for explicit draining.
    pub fn update_marketplace_mint(
        ctx: Context<UpdateMarketplaceMint>,
        fee_destination: Pubkey,
    ) -> Result<()> {
        instructions::update_marketplace_mint::handler(ctx, fee_destination)
    }

    // ──────────────────────────────────────────────────────
    // COLLECTION REGISTRY
    // ──────────────────────────────────────────────────────

    /// Register a collection under the marketplace. Authority only.
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        name: String,
        symbol: String,
        required_verifier: Pubkey,
        fee_bps: Option<u16>,
        ignore_creator_fee: bool,
    ) -> Result<()> {
        instructions::create_collection::handler(
            ctx,
            name,
            symbol,
            required_verifier,
            fee_bps,
            ignore_creator_fee,
        )
    }

    /// Update collection policy. Authority only, partial updates.
    pub fn update_collection(
        ctx: Context<UpdateCollection>,
        update: CollectionUpdate,
    ) -> Result<()> {
        instructions::update_collection::handler(ctx, update)
    }

    // ──────────────────────────────────────────────────────
    // SELL ORDER BOOK
    // ──────────────────────────────────────────────────────

    /// List `quantity` units at `price`, locking them in the asset
    /// vault. `destination` is credited with the seller share on fills.
    pub fn create_sell_order(
        ctx: Context<CreateSellOrder>,
        price: u64,
        quantity: u64,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::create_sell_order::handler(ctx, price, quantity, destination)
    }

    /// Top up an open order with more inventory. Seller only.
    pub fn add_quantity_to_sell_order(
        ctx: Context<AddQuantityToSellOrder>,
        quantity_to_add: u64,
    ) -> Result<()> {
        instructions::add_quantity_to_sell_order::handler(ctx, quantity_to_add)
    }

    /// Return inventory to the seller. Closes the order at zero
    /// quantity. Seller only.
    pub fn remove_sell_order(
        ctx: Context<RemoveSellOrder>,
        quantity_to_unlist: u64,
    ) -> Result<()> {
        instructions::remove_sell_order::handler(ctx, quantity_to_unlist)
    }

    /// Fill `ask_quantity` against the sell orders supplied as
    /// remaining accounts, atomically. Fails without any transfer if
    /// they cannot cover the ask, or if a consumed order is priced
    /// above `max_price`.
    pub fn buy<'info>(
        ctx: Context<'_, '_, 'info, 'info, Buy<'info>>,
        ask_quantity: u64,
        max_price: Option<u64>,
    ) -> Result<()> {
        instructions::buy::handler(ctx, ask_quantity, max_price)
    }

    // ──────────────────────────────────────────────────────
    // BUY OFFERS
    // ──────────────────────────────────────────────────────

    /// Open a standing offer for one unit, escrowing the price.
    pub fn create_buy_offer(ctx: Context<CreateBuyOffer>, proposed_price: u64) -> Result<()> {
        instructions::create_buy_offer::handler(ctx, proposed_price)
    }

    /// Cancel an offer and refund the escrowed price. Buyer only.
    pub fn remove_buy_offer(ctx: Context<RemoveBuyOffer>) -> Result<()> {
        instructions::remove_buy_offer::handler(ctx)
    }

    /// Seller accepts a standing offer: one asset unit to the buyer,
    /// escrowed funds distributed to creators, marketplace, seller.
    pub fn execute_offer<'info>(
        ctx: Context<'_, '_, 'info, 'info, ExecuteOffer<'info>>,
    ) -> Result<()> {
        instructions::execute_offer::handler(ctx)
    }
}

#[cfg(test)]
mod tests;
