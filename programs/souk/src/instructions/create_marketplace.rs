use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::MarketplaceCreated;
use crate::state::Marketplace;

// ──────────────────────────────────────────────────────
// Create Marketplace — one registry per creating wallet
//
// Initializes the registry PDA and the escrow vault token
// account for the settlement mint. Re-invocation by the same
// wallet fails at init: the address is deterministic.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct CreateMarketplace<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Marketplace::LEN,
        seeds = [Marketplace::SEED, payer.key().as_ref()],
        bump,
    )]
    pub marketplace: Account<'info, Marketplace>,

    /// The settlement currency mint
    pub mint: Account<'info, Mint>,

    /// Escrow vault for buy offers — a token account PDA that is
    /// its own authority; transfers out are signed with its seeds
    #[account(
        init,
        payer = payer,
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

pub fn handler(ctx: Context<CreateMarketplace>, fee_bps: u16, fee_destination: Pubkey) -> Result<()> {
    let marketplace = &mut ctx.accounts.marketplace;

    marketplace.authority = ctx.accounts.payer.key();
    marketplace.mint = ctx.accounts.mint.key();
    marketplace.fee_bps = fee_bps;
    marketplace.fee_destination = fee_destination;
    marketplace.bump = ctx.bumps.marketplace;
    marketplace.escrow_bump = ctx.bumps.escrow;

    marketplace.validate()?;

    emit!(MarketplaceCreated {
        marketplace: marketplace.key(),
        authority: marketplace.authority,
        mint: marketplace.mint,
        fee_bps,
    });

    Ok(())
}
