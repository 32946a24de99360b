use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::SoukError;
use crate::events::BuyOfferExecuted;
use crate::royalties::{
    assert_collection_member, collect_creator_payouts, royalty_distribution, FeeBreakdown,
};
use crate::state::{BuyOffer, Collection, Marketplace};

// ──────────────────────────────────────────────────────
// Execute Offer — the seller accepts a standing buy offer
//
// One unit of the asset moves seller -> buyer destination, and
// the escrowed price is distributed exactly as in `buy`:
// creators, marketplace fee, seller remainder. Remaining
// accounts carry the creator payout accounts when royalties
// apply. The offer account closes, rent back to the buyer.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct ExecuteOffer<'info> {
    pub seller: Signer<'info>,

    /// CHECK: Validated against buy_offer.authority; receives the
    /// closed offer's rent
    #[account(mut)]
    pub buyer: UncheckedAccount<'info>,

    pub marketplace: Box<Account<'info, Marketplace>>,

    #[account(constraint = collection.marketplace == marketplace.key())]
    pub collection: Box<Account<'info, Collection>>,

    #[account(
        mut,
        constraint = fee_destination.key() == marketplace.fee_destination
            @ SoukError::DerivedAddressInvalid,
    )]
    pub fee_destination: Box<Account<'info, TokenAccount>>,

    /// Vault of the mint the offer was escrowed under, which may
    /// predate a settlement mint switch on the marketplace
    #[account(
        mut,
        seeds = [
            Marketplace::ESCROW_SEED,
            marketplace.key().as_ref(),
            buy_offer.escrow_mint.as_ref(),
        ],
        bump = buy_offer.escrow_bump,
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,

    /// Receives the seller share of the escrowed price
    #[account(
        mut,
        constraint = seller_funds_destination.mint == buy_offer.escrow_mint,
    )]
    pub seller_funds_destination: Box<Account<'info, TokenAccount>>,

    /// The buyer's asset account recorded at offer creation
    #[account(mut)]
    pub destination: Box<Account<'info, TokenAccount>>,

    /// The seller's holding account giving up one unit
    #[account(
        mut,
        constraint = seller_asset_account.owner == seller.key(),
        constraint = seller_asset_account.mint == buy_offer.mint,
        constraint = seller_asset_account.amount >= 1 @ SoukError::InsufficientAssetBalance,
    )]
    pub seller_asset_account: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            buy_offer.mint.as_ref(),
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub metadata: Box<Account<'info, MetadataAccount>>,

    #[account(
        mut,
        close = buyer,
        has_one = marketplace,
        has_one = destination,
        constraint = buy_offer.authority == buyer.key(),
    )]
    pub buy_offer: Box<Account<'info, BuyOffer>>,

    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, ExecuteOffer<'info>>) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let collection = &ctx.accounts.collection;
    let metadata = &ctx.accounts.metadata;
    let buy_offer = &ctx.accounts.buy_offer;

    assert_collection_member(metadata, &buy_offer.mint, collection)?;

    // Asset leg: one unit seller -> buyer destination
    let asset_transfer = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.seller_asset_account.to_account_info(),
            to: ctx.accounts.destination.to_account_info(),
            authority: ctx.accounts.seller.to_account_info(),
        },
    );
    token::transfer(asset_transfer, 1)?;

    let mut creator_payouts = Vec::new();
    let royalty_bps = if collection.ignore_creator_fee {
        0
    } else {
        if let Some(creators) = metadata.creators.as_ref() {
            creator_payouts =
                collect_creator_payouts(creators, ctx.remaining_accounts, &buy_offer.escrow_mint)?;
        }
        metadata.seller_fee_basis_points
    };

    let total = buy_offer.proposed_price;
    let split = FeeBreakdown::split(total, collection.effective_fee_bps(marketplace), royalty_bps)?;
    let creator_shares: Vec<u8> = creator_payouts.iter().map(|(_, share)| *share).collect();
    let (creator_cuts, royalty_remainder) =
        royalty_distribution(split.royalty_share, &creator_shares)?;

    let marketplace_key = marketplace.key();
    let seeds = &[
        Marketplace::ESCROW_SEED,
        marketplace_key.as_ref(),
        buy_offer.escrow_mint.as_ref(),
        &[buy_offer.escrow_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    for ((payout_account, _), cut) in creator_payouts.iter().zip(creator_cuts) {
        if cut > 0 {
            pay_from_escrow(&ctx, payout_account.to_account_info(), cut, signer_seeds)?;
        }
    }

    if split.marketplace_share > 0 {
        pay_from_escrow(
            &ctx,
            ctx.accounts.fee_destination.to_account_info(),
            split.marketplace_share,
            signer_seeds,
        )?;
    }

    // Rounding remainder of the royalty pool joins the seller leg so
    // the escrow vault is fully drained of this offer's funds
    let seller_amount = split
        .seller_share
        .checked_add(royalty_remainder)
        .ok_or(SoukError::Overflow)?;
    pay_from_escrow(
        &ctx,
        ctx.accounts.seller_funds_destination.to_account_info(),
        seller_amount,
        signer_seeds,
    )?;

    emit!(BuyOfferExecuted {
        buy_offer: buy_offer.key(),
        mint: buy_offer.mint,
        seller: ctx.accounts.seller.key(),
        buyer: buy_offer.authority,
        price: total,
    });

    Ok(())
}

fn pay_from_escrow<'info>(
    ctx: &Context<'_, '_, 'info, 'info, ExecuteOffer<'info>>,
    to: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow.to_account_info(),
            to,
            authority: ctx.accounts.escrow.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)
}
