use anchor_lang::prelude::*;

use crate::events::CollectionCreated;
use crate::state::{Collection, Marketplace};

// ──────────────────────────────────────────────────────
// Create Collection — marketplace authority only
//
// Keyed by (marketplace, symbol). The symbol doubles as a PDA
// seed, so two collections of one marketplace cannot share it.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(name: String, symbol: String)]
pub struct CreateCollection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(has_one = authority)]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        init,
        payer = authority,
        space = Collection::LEN,
        seeds = [
            Collection::SEED,
            marketplace.key().as_ref(),
            symbol.as_bytes(),
        ],
        bump,
    )]
    pub collection: Account<'info, Collection>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateCollection>,
    name: String,
    symbol: String,
    required_verifier: Pubkey,
    fee_bps: Option<u16>,
    ignore_creator_fee: bool,
) -> Result<()> {
    let collection = &mut ctx.accounts.collection;

    collection.marketplace = ctx.accounts.marketplace.key();
    collection.name = name;
    collection.symbol = symbol;
    collection.required_verifier = required_verifier;
    collection.fee_bps = fee_bps;
    collection.ignore_creator_fee = ignore_creator_fee;
    collection.bump = ctx.bumps.collection;

    collection.validate()?;

    emit!(CollectionCreated {
        collection: collection.key(),
        marketplace: collection.marketplace,
        symbol: collection.symbol.clone(),
        required_verifier,
    });

    Ok(())
}
