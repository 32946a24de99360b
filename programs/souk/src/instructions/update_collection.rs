use anchor_lang::prelude::*;

use crate::state::{Collection, Marketplace};

// ──────────────────────────────────────────────────────
// Update Collection — marketplace authority only
//
// Partial update via options. Updating the symbol does not
// re-derive the PDA: the account keeps its original address.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateCollection<'info> {
    pub authority: Signer<'info>,

    #[account(has_one = authority)]
    pub marketplace: Account<'info, Marketplace>,

    #[account(
        mut,
        constraint = collection.marketplace == marketplace.key(),
    )]
    pub collection: Account<'info, Collection>,
}

/// What to update — all fields optional (None = don't change)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CollectionUpdate {
    pub fee_bps: Option<u16>,
    pub symbol: Option<String>,
    pub required_verifier: Option<Pubkey>,
    pub ignore_creator_fee: Option<bool>,
}

pub fn handler(ctx: Context<UpdateCollection>, update: CollectionUpdate) -> Result<()> {
    let collection = &mut ctx.accounts.collection;

    if let Some(fee_bps) = update.fee_bps {
        collection.fee_bps = Some(fee_bps);
        msg!("Collection fee override updated to {}bps", fee_bps);
    }

    if let Some(symbol) = update.symbol {
        collection.symbol = symbol;
    }

    if let Some(required_verifier) = update.required_verifier {
        collection.required_verifier = required_verifier;
    }

    if let Some(ignore_creator_fee) = update.ignore_creator_fee {
        collection.ignore_creator_fee = ignore_creator_fee;
        msg!("Creator fee ignored: {}", ignore_creator_fee);
    }

    collection.validate()?;
    Ok(())
}
