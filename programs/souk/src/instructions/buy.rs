use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::metadata::{Metadata, MetadataAccount};
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::errors::SoukError;
use crate::events::SellOrderFilled;
use crate::royalties::{
    assert_collection_member, collect_creator_payouts, royalty_distribution, FeeBreakdown,
};
use crate::state::{Ask, Collection, Marketplace, SellOrder};

// ──────────────────────────────────────────────────────
// Buy — fill against caller-supplied sell orders
//
// Remaining accounts, in order:
//   [creator payout accounts...]      when royalties apply
//   [sell order, seller destination]  repeated, filled in order
//
// The whole instruction is atomic: if the supplied orders cannot
// cover ask_quantity, every transfer reverts with the transaction.
// Each consumed order trades at its own stored price; max_price
// caps what the buyer is willing to pay per unit.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct Buy<'info> {
    pub buyer: Signer<'info>,

    /// Receives the purchased assets
    #[account(mut, constraint = buyer_asset_account.mint == asset_mint.key())]
    pub buyer_asset_account: Box<Account<'info, TokenAccount>>,

    /// Pays for the purchase, in the settlement currency
    #[account(
        mut,
        constraint = buyer_paying_account.owner == buyer.key(),
        constraint = buyer_paying_account.mint == marketplace.mint,
    )]
    pub buyer_paying_account: Box<Account<'info, TokenAccount>>,

    pub marketplace: Box<Account<'info, Marketplace>>,

    #[account(
        mut,
        constraint = fee_destination.key() == marketplace.fee_destination
            @ SoukError::DerivedAddressInvalid,
    )]
    pub fee_destination: Box<Account<'info, TokenAccount>>,

    #[account(constraint = collection.marketplace == marketplace.key())]
    pub collection: Box<Account<'info, Collection>>,

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

    #[account(
        mut,
        seeds = [SellOrder::VAULT_SEED, asset_mint.key().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    pub metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Buy<'info>>,
    ask_quantity: u64,
    max_price: Option<u64>,
) -> Result<()> {
    let marketplace = &ctx.accounts.marketplace;
    let collection = &ctx.accounts.collection;
    let metadata = &ctx.accounts.metadata;
    let asset_mint = ctx.accounts.asset_mint.key();

    assert_collection_member(metadata, &asset_mint, collection)?;

    // Creator payout accounts lead the remaining accounts when
    // royalty logic applies
    let mut creator_payouts = Vec::new();
    let mut cursor = 0usize;
    let royalty_bps = if collection.ignore_creator_fee {
        0
    } else {
        if let Some(creators) = metadata.creators.as_ref() {
            creator_payouts =
                collect_creator_payouts(creators, ctx.remaining_accounts, &marketplace.mint)?;
            cursor = creators.len();
        }
        metadata.seller_fee_basis_points
    };

    let fee_bps = collection.effective_fee_bps(marketplace);
    let creator_shares: Vec<u8> = creator_payouts.iter().map(|(_, share)| *share).collect();
    let marketplace_key = marketplace.key();

    let vault_seeds = &[
        SellOrder::VAULT_SEED,
        asset_mint.as_ref(),
        &[ctx.bumps.vault],
    ];
    let vault_signer = &[&vault_seeds[..]];

    let order_accounts = &ctx.remaining_accounts[cursor..];
    let mut ask = Ask::new(ask_quantity);

    for pair in order_accounts.chunks_exact(2) {
        if ask.is_satisfied() {
            break;
        }

        let mut sell_order = Account::<SellOrder>::try_from(&pair[0])
            .map_err(|_| SoukError::AccountNotInitialized)?;
        sell_order.assert_tradable(&marketplace_key, &asset_mint, max_price)?;

        let filled = ask.take_from(&mut sell_order);
        if filled == 0 {
            // Dormant zero-quantity order supplied, nothing to take
            continue;
        }

        // Asset leg: vault -> buyer, signed by the vault PDA
        let asset_transfer = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.buyer_asset_account.to_account_info(),
                authority: ctx.accounts.vault.to_account_info(),
            },
            vault_signer,
        );
        token::transfer(asset_transfer, filled)?;

        // Funds legs: buyer -> seller destination / fee destination / creators
        let seller_destination = &pair[1];
        require_keys_eq!(
            seller_destination.key(),
            sell_order.destination,
            SoukError::DerivedAddressInvalid
        );

        let total = sell_order
            .price
            .checked_mul(filled)
            .ok_or(SoukError::Overflow)?;
        let split = FeeBreakdown::split(total, fee_bps, royalty_bps)?;
        let (creator_cuts, royalty_remainder) =
            royalty_distribution(split.royalty_share, &creator_shares)?;

        // The rounding remainder of the royalty pool goes to the
        // seller: the buyer pays exactly `total`, no more, no less
        let seller_amount = split
            .seller_share
            .checked_add(royalty_remainder)
            .ok_or(SoukError::Overflow)?;
        pay_from_buyer(&ctx, seller_destination.to_account_info(), seller_amount)?;
        if split.marketplace_share > 0 {
            pay_from_buyer(
                &ctx,
                ctx.accounts.fee_destination.to_account_info(),
                split.marketplace_share,
            )?;
        }
        for ((payout_account, _), cut) in creator_payouts.iter().zip(creator_cuts) {
            if cut > 0 {
                pay_from_buyer(&ctx, payout_account.to_account_info(), cut)?;
            }
        }

        // Persist the decremented quantity; the order is not in the
        // accounts struct, so write-back is explicit
        sell_order.exit(ctx.program_id)?;

        emit!(SellOrderFilled {
            sell_order: pair[0].key(),
            mint: asset_mint,
            buyer: ctx.accounts.buyer.key(),
            quantity: filled,
            price: sell_order.price,
        });

    }

    ask.assert_satisfied()?;
    Ok(())
}

fn pay_from_buyer<'info>(
    ctx: &Context<'_, '_, 'info, 'info, Buy<'info>>,
    to: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.buyer_paying_account.to_account_info(),
            to,
            authority: ctx.accounts.buyer.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)
}
