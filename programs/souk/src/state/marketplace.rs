use anchor_lang::prelude::*;

use crate::errors::SoukError;

// ──────────────────────────────────────────────────────
// Marketplace — top-level registry, one PDA per creating wallet
//
// Owns the fee policy and the settlement currency. The escrow
// vault for buy offers is a token account PDA derived from
// (marketplace, mint) and re-derived when the mint changes.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct Marketplace {
    /// Authority allowed to update the registry and its collections.
    /// May diverge from the seed wallet after an authority transfer.
    pub authority: Pubkey,

    /// Settlement currency mint — all prices and fees are denominated
    /// in smallest units of this mint
    pub mint: Pubkey,

    /// Marketplace fee in basis points (0–10000), applied to every
    /// trade unless a collection overrides it
    pub fee_bps: u16,

    /// Token account credited with the marketplace fee on each fill
    pub fee_destination: Pubkey,

    /// PDA bump
    pub bump: u8,

    /// Bump of the escrow vault for the current mint
    pub escrow_bump: u8,
}

impl Marketplace {
    pub const LEN: usize = 8    // discriminator
        + 32                    // authority
        + 32                    // mint
        + 2                     // fee_bps
        + 32                    // fee_destination
        + 1                     // bump
        + 1                     // escrow_bump
        + 32;                   // padding for future fields

    pub const SEED: &'static [u8] = b"marketplace";

    /// Seed prefix of the escrow vault token account:
    /// ["escrow", marketplace, mint]
    pub const ESCROW_SEED: &'static [u8] = b"escrow";

    pub fn validate(&self) -> Result<()> {
        require!(self.fee_bps <= 10_000, SoukError::FeeTooHigh);
        Ok(())
    }
}
