use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::events::BuyOfferCreated;
use crate::royalties::assert_collection_member;
use crate::state::{BuyOffer, Collection, Marketplace};

// ──────────────────────────────────────────────────────
// Create Buy Offer
//
// Locks the proposed price in the marketplace escrow vault and
// opens an offer at (marketplace, buyer, mint, price). A buyer
// wanting a different price creates a separate offer; the same
// tuple twice fails at init.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(proposed_price: u64)]
pub struct CreateBuyOffer<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub asset_mint: Box<Account<'info, Mint>>,

    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            asset_mint.key().as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: Box<Account<'info, MetadataAccount>>,

    pub marketplace: Box<Account<'info, Marketplace>>,

    #[account(constraint = collection.marketplace == marketplace.key())]
    pub collection: Box<Account<'info, Collection>>,

    #[account(
        mut,
        seeds = [
            Marketplace::ESCROW_SEED,
            marketplace.key().as_ref(),
            marketplace.mint.as_ref(),
        ],
        bump = marketplace.escrow_bump,
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,

    /// Funds the offer, in the settlement currency
    #[account(
        mut,
        constraint = buyer_paying_account.owner == payer.key(),
        constraint = buyer_paying_account.mint == marketplace.mint,
    )]
    pub buyer_paying_account: Box<Account<'info, TokenAccount>>,

    /// Receives the asset if the offer is accepted — created up
    /// front so execution never depends on the buyer being online
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = asset_mint,
        associated_token::authority = payer,
    )]
    pub buyer_asset_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        space = BuyOffer::LEN,
        seeds = [
            BuyOffer::SEED,
            marketplace.key().as_ref(),
            payer.key().as_ref(),
            asset_mint.key().as_ref(),
            &proposed_price.to_le_bytes(),
        ],
        bump,
    )]
    pub buy_offer: Box<Account<'info, BuyOffer>>,

    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateBuyOffer>, proposed_price: u64) -> Result<()> {
    assert_collection_member(
        &ctx.accounts.metadata,
        &ctx.accounts.asset_mint.key(),
        &ctx.accounts.collection,
    )?;

    // Lock the funds in escrow for the lifetime of the offer
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.buyer_paying_account.to_account_info(),
            to: ctx.accounts.escrow.to_account_info(),
            authority: ctx.accounts.payer.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, proposed_price)?;

    let buy_offer = &mut ctx.accounts.buy_offer;
    buy_offer.marketplace = ctx.accounts.marketplace.key();
    buy_offer.mint = ctx.accounts.asset_mint.key();
    buy_offer.proposed_price = proposed_price;
    buy_offer.authority = ctx.accounts.payer.key();
    buy_offer.destination = ctx.accounts.buyer_asset_account.key();
    buy_offer.escrow_mint = ctx.accounts.marketplace.mint;
    buy_offer.bump = ctx.bumps.buy_offer;
    buy_offer.escrow_bump = ctx.accounts.marketplace.escrow_bump;

    emit!(BuyOfferCreated {
        buy_offer: buy_offer.key(),
        mint: buy_offer.mint,
        buyer: buy_offer.authority,
        proposed_price,
    });

    Ok(())
}
