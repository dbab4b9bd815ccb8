use std::sync::Arc;

use crate::portfolio::application::ports::incoming::use_cases::{
    FetchAssetUseCase, GetFullPortfolioUseCase, GetPortfolioUseCase, UploadAssetUseCase,
    UpsertPortfolioUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub get: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub get_full: Arc<dyn GetFullPortfolioUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertPortfolioUseCase + Send + Sync>,
    pub upload_asset: Arc<dyn UploadAssetUseCase + Send + Sync>,
    pub fetch_asset: Arc<dyn FetchAssetUseCase + Send + Sync>,
}
