use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::MarketplaceMintUpdated;
use crate::state::Marketplace;

// ──────────────────────────────────────────────────────
// Update Marketplace Mint — authority only
//
// Repoints the settlement currency and derives the escrow
// vault for the new mint. The old vault is abandoned in
// place; draining it is a separate administrative concern.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateMarketplaceMint<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut, has_one = authority)]
    pub marketplace: Account<'info, Marketplace>,

    /// The new settlement currency mint
    pub mint: Account<'info, Mint>,

    /// Escrow vault for the new mint. init_if_needed: switching
    /// back to a previously used mint reuses its vault.
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = mint,
        token::authority = escrow,
        seeds = [
            Marketplace::ESCROW_SEED,
            marketplace.key().as_ref(),
            mint.key().as_ref(),
        ],
        bump,
    )]
    pub escrow: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<UpdateMarketplaceMint>, fee_destination: Pubkey) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;

    marketplace.mint = ctx.accounts.mint.key();
    marketplace.fee_destination = fee_destination;
    marketplace.escrow_bump = ctx.bumps.escrow;

    marketplace.validate()?;

    emit!(MarketplaceMintUpdated {
        marketplace: marketplace.key(),
        mint: marketplace.mint,
        escrow: ctx.accounts.escrow.key(),
    });

    Ok(())
}
