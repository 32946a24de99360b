use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::types::Creator;

use crate::errors::SoukError;
use crate::state::marketplace::Marketplace;

// ──────────────────────────────────────────────────────
// Collection — per-collection policy, child of a Marketplace
//
// Keyed by (marketplace, symbol). Membership of an asset is
// attested by its Metaplex metadata: the symbol must match and
// the required verifier must appear as a verified creator.
// ──────────────────────────────────────────────────────

#[account]
pub struct Collection {
    /// The owning marketplace
    pub marketplace: Pubkey,

    /// Display name, informational only
    pub name: String,

    /// Symbol prefix assets must carry; also a PDA seed
    pub symbol: String,

    /// Creator pubkey that must be present and verified in the
    /// asset metadata for the asset to count as a member
    pub required_verifier: Pubkey,

    /// Fee override in basis points — takes priority over the
    /// marketplace fee when set
    pub fee_bps: Option<u16>,

    /// When true, creator royalties from asset metadata are not
    /// consulted or paid on fills
    pub ignore_creator_fee: bool,

    /// PDA bump
    pub bump: u8,
}

impl Collection {
    pub const MAX_NAME_LEN: usize = 32;
    /// Matches the Metaplex symbol budget
    pub const MAX_SYMBOL_LEN: usize = 10;

    pub const LEN: usize = 8                    // discriminator
        + 32                                    // marketplace
        + 4 + Self::MAX_NAME_LEN                // name
        + 4 + Self::MAX_SYMBOL_LEN              // symbol
        + 32                                    // required_verifier
        + 3                                     // fee_bps (Option<u16>)
        + 1                                     // ignore_creator_fee
        + 1                                     // bump
        + 32;                                   // padding for future fields

    pub const SEED: &'static [u8] = b"collection";

    pub fn validate(&self) -> Result<()> {
        require!(self.name.len() <= Self::MAX_NAME_LEN, SoukError::NameTooLong);
        require!(
            self.symbol.len() <= Self::MAX_SYMBOL_LEN,
            SoukError::SymbolTooLong
        );
        if let Some(fee_bps) = self.fee_bps {
            require!(fee_bps <= 10_000, SoukError::FeeTooHigh);
        }
        Ok(())
    }

    /// The fee rate applied to trades of this collection's assets.
    pub fn effective_fee_bps(&self, marketplace: &Marketplace) -> u16 {
        self.fee_bps.unwrap_or(marketplace.fee_bps)
    }

    /// Membership check against asset metadata fields. The on-chain
    /// symbol is zero-padded, hence prefix matching.
    pub fn is_member(&self, metadata_symbol: &str, creators: Option<&Vec<Creator>>) -> bool {
        match creators {
            Some(creators) => {
                metadata_symbol.starts_with(self.symbol.as_str())
                    && creators
                        .iter()
                        .any(|c| c.verified && c.address == self.required_verifier)
            }
            None => false,
        }
    }
}
