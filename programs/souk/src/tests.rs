use anchor_lang::prelude::*;
use anchor_spl::metadata::mpl_token_metadata::types::Creator;

use crate::errors::SoukError;
use crate::royalties::{creator_cut, royalty_distribution, FeeBreakdown};
use crate::state::{Ask, BuyOffer, Collection, Marketplace, SellOrder};

fn test_collection(symbol: &str, verifier: Pubkey) -> Collection {
    Collection {
        marketplace: Pubkey::new_unique(),
        name: "Test".to_string(),
        symbol: symbol.to_string(),
        required_verifier: verifier,
        fee_bps: None,
        ignore_creator_fee: false,
        bump: 255,
    }
}

#[test]
fn account_sizes() {
    assert_eq!(Marketplace::LEN, 8 + 32 + 32 + 2 + 32 + 1 + 1 + 32);
    assert_eq!(SellOrder::LEN, 8 + 32 + 32 + 8 + 8 + 32 + 32 + 1 + 1 + 32);
    assert_eq!(BuyOffer::LEN, 8 + 32 + 32 + 8 + 32 + 32 + 32 + 1 + 1 + 32);
    assert_eq!(
        Collection::LEN,
        8 + 32 + (4 + 32) + (4 + 10) + 32 + 3 + 1 + 1 + 32
    );
}

#[test]
fn marketplace_fee_cap() {
    let mut marketplace = Marketplace {
        fee_bps: 10_000,
        ..Marketplace::default()
    };
    assert!(marketplace.validate().is_ok());

    marketplace.fee_bps = 10_001;
    assert_eq!(
        marketplace.validate().unwrap_err(),
        SoukError::FeeTooHigh.into()
    );
}

#[test]
fn collection_fee_cap_and_lengths() {
    let mut collection = test_collection("SYM", Pubkey::new_unique());
    assert!(collection.validate().is_ok());

    collection.fee_bps = Some(10_001);
    assert_eq!(
        collection.validate().unwrap_err(),
        SoukError::FeeTooHigh.into()
    );

    collection.fee_bps = Some(500);
    collection.symbol = "ELEVENCHARS".to_string();
    assert_eq!(
        collection.validate().unwrap_err(),
        SoukError::SymbolTooLong.into()
    );

    collection.symbol = "SYM".to_string();
    collection.name = "x".repeat(33);
    assert_eq!(
        collection.validate().unwrap_err(),
        SoukError::NameTooLong.into()
    );
}

#[test]
fn collection_fee_overrides_marketplace_fee() {
    let marketplace = Marketplace {
        fee_bps: 200,
        ..Marketplace::default()
    };
    let mut collection = test_collection("SYM", Pubkey::new_unique());

    assert_eq!(collection.effective_fee_bps(&marketplace), 200);

    collection.fee_bps = Some(500);
    assert_eq!(collection.effective_fee_bps(&marketplace), 500);
}

#[test]
fn collection_membership() {
    let verifier = Pubkey::new_unique();
    let collection = test_collection("SYM", verifier);

    let verified = vec![Creator {
        address: verifier,
        verified: true,
        share: 100,
    }];
    // On-chain symbols are zero padded, membership is a prefix match
    assert!(collection.is_member("SYM\0\0\0\0", Some(&verified)));
    assert!(collection.is_member("SYMBOL", Some(&verified)));
    assert!(!collection.is_member("OTHER", Some(&verified)));

    let unverified = vec![Creator {
        address: verifier,
        verified: false,
        share: 100,
    }];
    assert!(!collection.is_member("SYM", Some(&unverified)));

    let wrong_verifier = vec![Creator {
        address: Pubkey::new_unique(),
        verified: true,
        share: 100,
    }];
    assert!(!collection.is_member("SYM", Some(&wrong_verifier)));

    assert!(!collection.is_member("SYM", None));
}

// The pinned distribution contract: collection fee 500bps on a price
// of 1000 pays the marketplace 50, a 1000bps metadata royalty pays
// creators 100, and the seller keeps 850. The two pools are additive,
// each computed against the full price.
#[test]
fn fee_split_worked_example() {
    let split = FeeBreakdown::split(1000, 500, 1000).unwrap();
    assert_eq!(split.marketplace_share, 50);
    assert_eq!(split.royalty_share, 100);
    assert_eq!(split.seller_share, 850);

    // Single creator at 100% share takes the whole royalty pool
    assert_eq!(creator_cut(split.royalty_share, 100).unwrap(), 100);
}

#[test]
fn fee_split_no_royalty() {
    let split = FeeBreakdown::split(1000, 200, 0).unwrap();
    assert_eq!(split.marketplace_share, 20);
    assert_eq!(split.royalty_share, 0);
    assert_eq!(split.seller_share, 980);
}

#[test]
fn fee_split_conserves_value() {
    for total in [1u64, 999, 1000, 123_456_789, u64::MAX / 20_000] {
        for fee_bps in [0u16, 1, 200, 500, 9_999, 10_000] {
            for royalty_bps in [0u16, 100, 1_000] {
                if fee_bps as u32 + royalty_bps as u32 > 10_000 {
                    continue;
                }
                let split = FeeBreakdown::split(total, fee_bps, royalty_bps).unwrap();
                assert_eq!(
                    split.marketplace_share + split.royalty_share + split.seller_share,
                    total
                );
            }
        }
    }
}

#[test]
fn fee_split_full_fee_leaves_seller_nothing() {
    let split = FeeBreakdown::split(1000, 10_000, 0).unwrap();
    assert_eq!(split.marketplace_share, 1000);
    assert_eq!(split.seller_share, 0);
}

#[test]
fn creator_cuts_follow_shares() {
    let pool = 100;
    let cuts: Vec<u64> = [60u8, 40]
        .iter()
        .map(|share| creator_cut(pool, *share).unwrap())
        .collect();
    assert_eq!(cuts, vec![60, 40]);
    assert_eq!(cuts.iter().sum::<u64>(), pool);
}

#[test]
fn royalty_distribution_remainder_goes_back() {
    // Two 50% creators of a 99-unit pool floor to 49 each; the odd
    // unit must come back out instead of staying in custody
    let (cuts, remainder) = royalty_distribution(99, &[50, 50]).unwrap();
    assert_eq!(cuts, vec![49, 49]);
    assert_eq!(remainder, 1);

    let (cuts, remainder) = royalty_distribution(100, &[60, 40]).unwrap();
    assert_eq!(cuts, vec![60, 40]);
    assert_eq!(remainder, 0);

    // No creators: the whole pool is remainder
    let (cuts, remainder) = royalty_distribution(77, &[]).unwrap();
    assert!(cuts.is_empty());
    assert_eq!(remainder, 77);
}

#[test]
fn odd_price_distribution_drains_every_unit() {
    let split = FeeBreakdown::split(999, 500, 1000).unwrap();
    assert_eq!(split.marketplace_share, 49);
    assert_eq!(split.royalty_share, 99);
    assert_eq!(split.seller_share, 851);

    let (cuts, remainder) = royalty_distribution(split.royalty_share, &[50, 50]).unwrap();
    let seller_amount = split.seller_share + remainder;
    assert_eq!(seller_amount, 852);
    assert_eq!(
        split.marketplace_share + cuts.iter().sum::<u64>() + seller_amount,
        999
    );
}

#[test]
fn sell_order_fill_partial_and_drain() {
    let mut order = SellOrder {
        price: 1000,
        quantity: 4,
        ..SellOrder::default()
    };

    assert_eq!(order.fill(3), 3);
    assert_eq!(order.quantity, 1);

    // Asking for more than remains consumes only what is left
    assert_eq!(order.fill(5), 1);
    assert_eq!(order.quantity, 0);

    // A drained order yields nothing
    assert_eq!(order.fill(2), 0);
}

#[test]
fn sell_order_unlist_bounds() {
    let mut order = SellOrder {
        quantity: 4,
        ..SellOrder::default()
    };

    assert_eq!(
        order.unlist(5).unwrap_err(),
        SoukError::UnlistExceedsOwned.into()
    );
    assert_eq!(order.quantity, 4);

    assert!(order.unlist(4).is_ok());
    assert_eq!(order.quantity, 0);

    // Unlisting zero from a drained order is the reclaim path
    assert!(order.unlist(0).is_ok());
}

#[test]
fn sell_order_top_up_round_trip() {
    let mut order = SellOrder {
        quantity: 4,
        ..SellOrder::default()
    };

    assert!(order.top_up(3).is_ok());
    assert_eq!(order.quantity, 7);
    assert!(order.unlist(3).is_ok());
    assert_eq!(order.quantity, 4);

    order.quantity = u64::MAX;
    assert_eq!(order.top_up(1).unwrap_err(), SoukError::Overflow.into());
}

fn listed_order(marketplace: Pubkey, mint: Pubkey, price: u64, quantity: u64) -> SellOrder {
    SellOrder {
        marketplace,
        mint,
        price,
        quantity,
        ..SellOrder::default()
    }
}

#[test]
fn tradable_only_within_marketplace_and_mint() {
    let marketplace = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let order = listed_order(marketplace, mint, 1000, 1);

    assert!(order.assert_tradable(&marketplace, &mint, None).is_ok());

    // An order listed on another marketplace must not fill here, even
    // for the same mint
    assert_eq!(
        order
            .assert_tradable(&Pubkey::new_unique(), &mint, None)
            .unwrap_err(),
        SoukError::SellOrderMarketplaceMismatch.into()
    );

    assert_eq!(
        order
            .assert_tradable(&marketplace, &Pubkey::new_unique(), None)
            .unwrap_err(),
        SoukError::SellOrderMintMismatch.into()
    );
}

#[test]
fn tradable_respects_price_limit() {
    let marketplace = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let order = listed_order(marketplace, mint, 1000, 1);

    assert!(order.assert_tradable(&marketplace, &mint, Some(1000)).is_ok());
    assert_eq!(
        order
            .assert_tradable(&marketplace, &mint, Some(999))
            .unwrap_err(),
        SoukError::PriceAboveLimit.into()
    );
}

#[test]
fn ask_fills_across_orders_in_sequence() {
    let marketplace = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut first = listed_order(marketplace, mint, 1000, 2);
    let mut second = listed_order(marketplace, mint, 1100, 3);

    let mut ask = Ask::new(4);
    assert_eq!(ask.take_from(&mut first), 2);
    assert!(!ask.is_satisfied());
    assert_eq!(ask.take_from(&mut second), 2);
    assert!(ask.is_satisfied());
    assert!(ask.assert_satisfied().is_ok());

    assert_eq!(first.quantity, 0);
    assert_eq!(second.quantity, 1);

    // A satisfied ask takes nothing further
    assert_eq!(ask.take_from(&mut second), 0);
    assert_eq!(second.quantity, 1);
}

#[test]
fn ask_rejects_partial_coverage() {
    let marketplace = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let mut first = listed_order(marketplace, mint, 1000, 1);
    let mut second = listed_order(marketplace, mint, 1000, 2);

    let mut ask = Ask::new(5);
    ask.take_from(&mut first);
    ask.take_from(&mut second);
    assert!(!ask.is_satisfied());
    assert_eq!(
        ask.assert_satisfied().unwrap_err(),
        SoukError::InsufficientFillableQuantity.into()
    );
}
