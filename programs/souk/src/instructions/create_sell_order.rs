use anchor_lang::prelude::*;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::events::SellOrderCreated;
use crate::royalties::assert_collection_member;
use crate::state::{Collection, Marketplace, SellOrder};

// ──────────────────────────────────────────────────────
// Create Sell Order
//
// Locks `quantity` units of the asset in the per-mint vault
// and opens an order at (holding account, price). A second
// order at the same price for the same holding account fails
// at init; a different price is a separate order.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(price: u64)]
pub struct CreateSellOrder<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The seller's holding account for the asset
    #[account(
        mut,
        constraint = seller_asset_account.owner == payer.key(),
        constraint = seller_asset_account.mint == asset_mint.key(),
    )]
    pub seller_asset_account: Box<Account<'info, TokenAccount>>,

    pub marketplace: Box<Account<'info, Marketplace>>,

    #[account(constraint = collection.marketplace == marketplace.key())]
    pub collection: Box<Account<'info, Collection>>,

    pub asset_mint: Box<Account<'info, Mint>>,

    /// Metaplex metadata of the asset — the seeds constraint pins it
    /// to the canonical derivation for `asset_mint`
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

    /// Per-mint custody vault — a token account PDA that is its own
    /// authority, shared by every sell order for this mint
    #[account(
        init_if_needed,
        payer = payer,
        token::mint = asset_mint,
        token::authority = vault,
        seeds = [SellOrder::VAULT_SEED, asset_mint.key().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        space = SellOrder::LEN,
        seeds = [
            SellOrder::SEED,
            seller_asset_account.key().as_ref(),
            &price.to_le_bytes(),
        ],
        bump,
    )]
    pub sell_order: Box<Account<'info, SellOrder>>,

    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateSellOrder>,
    price: u64,
    quantity: u64,
    destination: Pubkey,
) -> Result<()> {
    assert_collection_member(
        &ctx.accounts.metadata,
        &ctx.accounts.asset_mint.key(),
        &ctx.accounts.collection,
    )?;

    // Lock inventory in the vault
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.seller_asset_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.payer.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, quantity)?;

    let sell_order = &mut ctx.accounts.sell_order;
    sell_order.marketplace = ctx.accounts.marketplace.key();
    sell_order.mint = ctx.accounts.asset_mint.key();
    sell_order.price = price;
    sell_order.quantity = quantity;
    sell_order.authority = ctx.accounts.payer.key();
    sell_order.destination = destination;
    sell_order.bump = ctx.bumps.sell_order;
    sell_order.vault_bump = ctx.bumps.vault;

    emit!(SellOrderCreated {
        sell_order: sell_order.key(),
        mint: sell_order.mint,
        seller: sell_order.authority,
        price,
        quantity,
    });

    Ok(())
}
