use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// BuyOffer — a standing offer to buy one unit at a fixed price
//
// Keyed by (marketplace, buyer, mint, price): exactly one open
// offer per tuple. The marketplace escrow vault holds
// `proposed_price` for the lifetime of the offer; the account is
// closed on cancellation (refund) or execution (distribution).
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct BuyOffer {
    /// The owning marketplace
    pub marketplace: Pubkey,

    /// Mint of the asset the buyer wants
    pub mint: Pubkey,

    /// Offered price in settlement currency smallest units
    pub proposed_price: u64,

    /// The buyer — sole party allowed to cancel
    pub authority: Pubkey,

    /// Buyer's token account receiving the asset on execution
    pub destination: Pubkey,

    /// Settlement mint the offer was escrowed under. Refunds and
    /// executions draw on this mint's vault even after the
    /// marketplace switches to a new settlement mint.
    pub escrow_mint: Pubkey,

    /// PDA bump
    pub bump: u8,

    /// Bump of the escrow vault holding this offer's funds
    pub escrow_bump: u8,
}

impl BuyOffer {
    pub const LEN: usize = 8    // discriminator
        + 32                    // marketplace
        + 32                    // mint
        + 8                     // proposed_price
        + 32                    // authority
        + 32                    // destination
        + 32                    // escrow_mint
        + 1                     // bump
        + 1                     // escrow_bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"buy_offer";
}
