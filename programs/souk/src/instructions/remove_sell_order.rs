use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::events::SellOrderRemoved;
use crate::state::SellOrder;

// ──────────────────────────────────────────────────────
// Remove Sell Order — order authority only
//
// Returns inventory from the vault to the seller. An order
// drained to zero is closed and its rent returned to the
// seller; passing quantity 0 reclaims an order that was
// fully consumed by buys.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct RemoveSellOrder<'info> {
    #[account(mut)]
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

pub fn handler(ctx: Context<RemoveSellOrder>, quantity_to_unlist: u64) -> Result<()> {
    let sell_order = &mut ctx.accounts.sell_order;
    sell_order.unlist(quantity_to_unlist)?;

    let mint = sell_order.mint;
    let seeds = &[
        SellOrder::VAULT_SEED,
        mint.as_ref(),
        &[sell_order.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.seller_asset_account.to_account_info(),
            authority: ctx.accounts.vault.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, quantity_to_unlist)?;

    emit!(SellOrderRemoved {
        sell_order: sell_order.key(),
        quantity_unlisted: quantity_to_unlist,
        quantity: sell_order.quantity,
    });

    if sell_order.quantity == 0 {
        ctx.accounts
            .sell_order
            .close(ctx.accounts.authority.to_account_info())?;
    }

    Ok(())
}
