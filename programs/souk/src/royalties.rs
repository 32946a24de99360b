use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::metadata::mpl_token_metadata::types::Creator;
use anchor_spl::metadata::MetadataAccount;

use crate::errors::SoukError;
use crate::state::Collection;

// ──────────────────────────────────────────────────────
// Trade value distribution
//
// Two independent pools are taken from the full trade value:
// the marketplace fee (collection override or marketplace
// default, basis 10000) and the creator royalty pool
// (metadata seller_fee_basis_points, basis 10000). They are
// additive, not nested; the seller receives the remainder.
// The royalty pool is split among creators by their metadata
// `share`, a percentage on basis 100.
// ──────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub marketplace_share: u64,
    pub royalty_share: u64,
    pub seller_share: u64,
}

impl FeeBreakdown {
    /// Split `total` between marketplace, creators, and seller.
    /// `royalty_bps` must already be zeroed when the collection
    /// ignores creator fees.
    pub fn split(total: u64, marketplace_fee_bps: u16, royalty_bps: u16) -> Result<Self> {
        let marketplace_share = share_of(total, marketplace_fee_bps as u64, 10_000)?;
        let royalty_share = share_of(total, royalty_bps as u64, 10_000)?;
        let seller_share = total
            .checked_sub(marketplace_share)
            .and_then(|n| n.checked_sub(royalty_share))
            .ok_or(SoukError::Overflow)?;

        Ok(Self {
            marketplace_share,
            royalty_share,
            seller_share,
        })
    }
}

/// A single creator's cut of the royalty pool. `share` is the
/// percentage recorded in asset metadata.
pub fn creator_cut(royalty_share: u64, share: u8) -> Result<u64> {
    share_of(royalty_share, share as u64, 100)
}

/// Per-creator amounts for the royalty pool, plus the floor-rounding
/// remainder. The remainder goes to the seller so every unit of the
/// pool leaves custody — nothing may stay behind in the escrow vault.
pub fn royalty_distribution(pool: u64, shares: &[u8]) -> Result<(Vec<u64>, u64)> {
    let mut cuts = Vec::with_capacity(shares.len());
    let mut distributed: u64 = 0;
    for share in shares {
        let cut = creator_cut(pool, *share)?;
        distributed = distributed.checked_add(cut).ok_or(SoukError::Overflow)?;
        cuts.push(cut);
    }
    let remainder = pool.checked_sub(distributed).ok_or(SoukError::Overflow)?;
    Ok((cuts, remainder))
}

fn share_of(total: u64, numerator: u64, basis: u64) -> Result<u64> {
    (total as u128)
        .checked_mul(numerator as u128)
        .and_then(|n| n.checked_div(basis as u128))
        .and_then(|n| u64::try_from(n).ok())
        .ok_or(SoukError::Overflow.into())
}

/// Check that the metadata describes `asset_mint` and that the asset
/// belongs to the collection. Fails closed on either count.
pub fn assert_collection_member(
    metadata: &MetadataAccount,
    asset_mint: &Pubkey,
    collection: &Collection,
) -> Result<()> {
    require!(
        metadata.mint == *asset_mint,
        SoukError::MetadataMintMismatch
    );
    require!(
        collection.is_member(&metadata.symbol, metadata.creators.as_ref()),
        SoukError::AssetNotInRequiredCollection
    );
    Ok(())
}

/// Pair each metadata creator with its supplied payout account.
///
/// Payouts settle in the marketplace currency, so each creator must be
/// paid to their associated token account for `settlement_mint`; any
/// other account fails validation.
pub fn collect_creator_payouts<'c, 'info>(
    creators: &[Creator],
    payout_accounts: &'c [AccountInfo<'info>],
    settlement_mint: &Pubkey,
) -> Result<Vec<(&'c AccountInfo<'info>, u8)>> {
    require!(
        payout_accounts.len() >= creators.len(),
        SoukError::DerivedAddressInvalid
    );

    let mut payouts = Vec::with_capacity(creators.len());
    for (creator, account) in creators.iter().zip(payout_accounts.iter()) {
        let expected = get_associated_token_address(&creator.address, settlement_mint);
        require_keys_eq!(account.key(), expected, SoukError::DerivedAddressInvalid);
        payouts.push((account, creator.share));
    }
    Ok(payouts)
}
