mod fetch_asset_service;
mod get_full_portfolio_service;
mod get_portfolio_service;
mod upload_asset_service;
mod upsert_portfolio_service;

pub use fetch_asset_service::FetchAssetService;
pub use get_full_portfolio_service::GetFullPortfolioService;
pub use get_portfolio_service::GetPortfolioService;
pub use upload_asset_service::UploadAssetService;
pub use upsert_portfolio_service::UpsertPortfolioService;
