use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::BuyOfferRemoved;
use crate::state::{BuyOffer, Marketplace};

// ──────────────────────────────────────────────────────
// Remove Buy Offer — offer authority only
//
// Refunds the escrowed price to the buyer and closes the
// offer account, rent back to the buyer. The refund draws on
// the vault of the mint the offer was escrowed under, so
// offers predating a settlement mint switch stay refundable.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RemoveBuyOffer<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    pub marketplace: Account<'info, Marketplace>,

    #[account(
        mut,
        close = buyer,
        has_one = marketplace,
        constraint = buy_offer.authority == buyer.key(),
    )]
    pub buy_offer: Account<'info, BuyOffer>,

    #[account(
        mut,
        seeds = [
            Marketplace::ESCROW_SEED,
            marketplace.key().as_ref(),
            buy_offer.escrow_mint.as_ref(),
        ],
        bump = buy_offer.escrow_bump,
    )]
    pub escrow: Account<'info, TokenAccount>,

    /// Receives the refund
    #[account(
        mut,
        constraint = buyer_paying_account.owner == buyer.key(),
        constraint = buyer_paying_account.mint == buy_offer.escrow_mint,
    )]
    pub buyer_paying_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RemoveBuyOffer>) -> Result<()> {
    let marketplace_key = ctx.accounts.marketplace.key();
    let seeds = &[
        Marketplace::ESCROW_SEED,
        marketplace_key.as_ref(),
        ctx.accounts.buy_offer.escrow_mint.as_ref(),
        &[ctx.accounts.buy_offer.escrow_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let refund = ctx.accounts.buy_offer.proposed_price;
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow.to_account_info(),
            to: ctx.accounts.buyer_paying_account.to_account_info(),
            authority: ctx.accounts.escrow.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, refund)?;

    emit!(BuyOfferRemoved {
        buy_offer: ctx.accounts.buy_offer.key(),
        refund,
    });

    Ok(())
}
