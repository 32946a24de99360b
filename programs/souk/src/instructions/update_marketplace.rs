use anchor_lang::prelude::*;

use crate::state::Marketplace;

// ──────────────────────────────────────────────────────
// Update Marketplace — authority only
//
// Partial update: every field is optional, None keeps the
// current value. A mint change goes through the dedicated
// update_marketplace_mint instruction since it re-derives
// the escrow vault.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateMarketplace<'info> {
    pub authority: Signer<'info>,

    #[account(mut, has_one = authority)]
    pub marketplace: Account<'info, Marketplace>,
}

/// What to update — all fields optional (None = don't change)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct MarketplaceUpdate {
    pub fee_bps: Option<u16>,
    pub fee_destination: Option<Pubkey>,
    pub authority: Option<Pubkey>,
}

pub fn handler(ctx: Context<UpdateMarketplace>, update: MarketplaceUpdate) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;

    if let Some(fee_bps) = update.fee_bps {
        marketplace.fee_bps = fee_bps;
        msg!("Marketplace fee updated to {}bps", fee_bps);
    }

    if let Some(fee_destination) = update.fee_destination {
        marketplace.fee_destination = fee_destination;
        msg!("Fee destination updated to {}", fee_destination);
    }

    if let Some(authority) = update.authority {
        msg!(
            "Marketplace authority transferred from {} to {}",
            marketplace.authority,
            authority
        );
        marketplace.authority = authority;
    }

    marketplace.validate()?;
    Ok(())
}
