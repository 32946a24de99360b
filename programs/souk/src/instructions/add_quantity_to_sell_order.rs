use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::SellOrderQuantityAdded;
use crate::state::SellOrder;

// ──────────────────────────────────────────────────────
// Add Quantity — order authority only
//
// Moves more inventory from the seller's holding account into
// the vault and tops up the order.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct AddQuantityToSellOrder<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = seller_asset_account.owner == authority.key(),
        constraint = seller_asset_account.mint == sell_order.mint,
    )]
    pub seller_asset_account: Account<'info, TokenAccount>,

    #[account(mut, has_one = authority)]
    pub sell_order: Account<'info, SellOrder>,

    #[account(
        mut,
        seeds = [SellOrder::VAULT_SEED, sell_order.mint.as_ref()],
        bump = sell_order.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<AddQuantityToSellOrder>, quantity_to_add: u64) -> Result<()> {
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.seller_asset_account.to_account_info(),
            to: ctx.accounts.vault.to_account_info(),
            authority: ctx.accounts.authority.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, quantity_to_add)?;

    let sell_order = &mut ctx.accounts.sell_order;
    sell_order.top_up(quantity_to_add)?;

    emit!(SellOrderQuantityAdded {
        sell_order: sell_order.key(),
        quantity_added: quantity_to_add,
        quantity: sell_order.quantity,
    });

    Ok(())
}
