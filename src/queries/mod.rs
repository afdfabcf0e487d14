pub mod admin_queries;
pub mod collection_queries;
pub mod order_queries;
pub mod pricing_queries;
pub mod product_queries;
pub mod solde_queries;
pub mod weekly_offer_queries;
