pub mod add_quantity_to_sell_order;
pub mod buy;
pub mod create_buy_offer;
pub mod create_collection;
pub mod create_marketplace;
pub mod create_sell_order;
pub mod execute_offer;
pub mod remove_buy_offer;
pub mod remove_sell_order;
pub mod update_collection;
pub mod update_marketplace;
pub mod update_marketplace_mint;

pub use add_quantity_to_sell_order::*;
pub use buy::*;
pub use create_buy_offer::*;
pub use create_collection::*;
pub use create_marketplace::*;
pub use create_sell_order::*;
pub use execute_offer::*;
pub use remove_buy_offer::*;
pub use remove_sell_order::*;
pub use update_collection::*;
pub use update_marketplace::*;
pub use update_marketplace_mint::*;
