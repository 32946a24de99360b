use anchor_lang::prelude::*;

use crate::errors::SoukError;

// ──────────────────────────────────────────────────────
// SellOrder — a standing lot of N units at a fixed price
//
// Keyed by (seller holding account, price): one open order per
// price point, a different price is a different order. Inventory
// backing the order sits in the per-mint asset vault; the vault
// balance equals the sum of open order quantities for that mint.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct SellOrder {
    /// The owning marketplace
    pub marketplace: Pubkey,

    /// Mint of the asset being sold
    pub mint: Pubkey,

    /// Price per unit in settlement currency smallest units
    pub price: u64,

    /// Remaining unsold quantity
    pub quantity: u64,

    /// The seller — sole party allowed to cancel or top up
    pub authority: Pubkey,

    /// Token account credited with the seller share on each fill
    pub destination: Pubkey,

    /// PDA bump
    pub bump: u8,

    /// Bump of the asset vault for this mint
    pub vault_bump: u8,
}

impl SellOrder {
    pub const LEN: usize = 8    // discriminator
        + 32                    // marketplace
        + 32                    // mint
        + 8                     // price
        + 8                     // quantity
        + 32                    // authority
        + 32                    // destination
        + 1                     // bump
        + 1                     // vault_bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"sell_order";

    /// Seed prefix of the per-mint asset vault token account:
    /// ["asset_vault", mint]
    pub const VAULT_SEED: &'static [u8] = b"asset_vault";

    /// Consume up to `ask` units from the order. Returns the quantity
    /// actually filled, zero when the order is already drained.
    pub fn fill(&mut self, ask: u64) -> u64 {
        let filled = ask.min(self.quantity);
        self.quantity -= filled;
        filled
    }

    /// An order may only fill a trade on its own marketplace, for its
    /// own mint, and within the buyer's price limit. Orders priced in
    /// another marketplace's currency must never settle here.
    pub fn assert_tradable(
        &self,
        marketplace: &Pubkey,
        mint: &Pubkey,
        max_price: Option<u64>,
    ) -> Result<()> {
        require_keys_eq!(
            self.marketplace,
            *marketplace,
            SoukError::SellOrderMarketplaceMismatch
        );
        require_keys_eq!(self.mint, *mint, SoukError::SellOrderMintMismatch);
        if let Some(limit) = max_price {
            require!(self.price <= limit, SoukError::PriceAboveLimit);
        }
        Ok(())
    }

    /// Return `quantity_to_unlist` units to the seller's control.
    pub fn unlist(&mut self, quantity_to_unlist: u64) -> Result<()> {
        require!(
            quantity_to_unlist <= self.quantity,
            SoukError::UnlistExceedsOwned
        );
        self.quantity -= quantity_to_unlist;
        Ok(())
    }

    pub fn top_up(&mut self, quantity_to_add: u64) -> Result<()> {
        self.quantity = self
            .quantity
            .checked_add(quantity_to_add)
            .ok_or(SoukError::Overflow)?;
        Ok(())
    }
}

/// The buyer's outstanding ask across one fill pass. Consumes orders
/// in caller order; the pass only commits if the ask is fully covered.
pub struct Ask {
    remaining: u64,
}

impl Ask {
    pub fn new(quantity: u64) -> Self {
        Self {
            remaining: quantity,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.remaining == 0
    }

    /// Take as much of the ask as the order can cover.
    pub fn take_from(&mut self, order: &mut SellOrder) -> u64 {
        let filled = order.fill(self.remaining);
        self.remaining -= filled;
        filled
    }

    /// The supplied orders must cover the whole ask; anything less
    /// fails the instruction and reverts every transfer with it.
    pub fn assert_satisfied(&self) -> Result<()> {
        require!(
            self.remaining == 0,
            SoukError::InsufficientFillableQuantity
        );
        Ok(())
    }
}
