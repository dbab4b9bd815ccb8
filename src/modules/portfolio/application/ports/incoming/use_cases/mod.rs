mod fetch_asset_use_case;
mod get_full_portfolio_use_case;
mod get_portfolio_use_case;
mod upload_asset_use_case;
mod upsert_portfolio_use_case;

pub use fetch_asset_use_case::{AssetPayload, FetchAssetError, FetchAssetUseCase};
pub use get_full_portfolio_use_case::{GetFullPortfolioError, GetFullPortfolioUseCase};
pub use get_portfolio_use_case::GetPortfolioUseCase;
pub use upload_asset_use_case::{
    UploadAssetCommand, UploadAssetCommandError, UploadAssetError, UploadAssetUseCase, UploadedFile,
};
pub use upsert_portfolio_use_case::{
    UpsertPortfolioCommand, UpsertPortfolioCommandError, UpsertPortfolioError,
    UpsertPortfolioUseCase,
};
