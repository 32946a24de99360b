use anchor_lang::prelude::*;

#[error_code]
pub enum SoukError {
    // ── Registry errors ──
    #[msg("Fee must be at most 10000 basis points")]
    FeeTooHigh,

    #[msg("Collection name exceeds the maximum length")]
    NameTooLong,

    #[msg("Collection symbol exceeds the maximum length")]
    SymbolTooLong,

    // ── Sell order errors ──
    #[msg("Trying to unlist more than the order holds")]
    UnlistExceedsOwned,

    #[msg("Supplied sell orders cannot cover the requested quantity")]
    InsufficientFillableQuantity,

    #[msg("A consumed sell order is priced above the buyer's limit")]
    PriceAboveLimit,

    #[msg("Sell order mint does not match the traded mint")]
    SellOrderMintMismatch,

    #[msg("Sell order belongs to a different marketplace")]
    SellOrderMarketplaceMismatch,

    // ── Buy offer errors ──
    #[msg("Seller does not hold the offered asset")]
    InsufficientAssetBalance,

    // ── Metadata errors ──
    #[msg("Metadata account does not describe the traded mint")]
    MetadataMintMismatch,

    #[msg("Asset is not part of the required collection")]
    AssetNotInRequiredCollection,

    // ── Account errors ──
    #[msg("Supplied account does not match the derived address")]
    DerivedAddressInvalid,

    #[msg("Supplied account is not an initialized program account")]
    AccountNotInitialized,

    // ── Arithmetic errors ──
    #[msg("Arithmetic overflow")]
    Overflow,
}
