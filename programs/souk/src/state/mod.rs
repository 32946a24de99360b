pub mod buy_offer;
pub mod collection;
pub mod marketplace;
pub mod sell_order;

pub use buy_offer::*;
pub use collection::*;
pub use marketplace::*;
pub use sell_order::*;
