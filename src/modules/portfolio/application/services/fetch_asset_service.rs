use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{data_uri::DataUri, entities::AssetKind},
    ports::{
        incoming::use_cases::{AssetPayload, FetchAssetError, FetchAssetUseCase},
        outgoing::PortfolioQuery,
    },
};

pub struct FetchAssetService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchAssetService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchAssetUseCase for FetchAssetService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self, kind: AssetKind) -> Result<AssetPayload, FetchAssetError> {
        let raw = self
            .query
            .fetch_asset(kind)
            .await
            .map_err(|e| FetchAssetError::RepositoryError(e.to_string()))?
            .ok_or(FetchAssetError::NotFound)?;

        let uri = DataUri::parse(raw).map_err(|e| FetchAssetError::Malformed(e.to_string()))?;
        let bytes = uri
            .decode()
            .map_err(|e| FetchAssetError::Malformed(e.to_string()))?;

        Ok(AssetPayload {
            mime: uri.mime().to_string(),
            bytes,
        })
    }
}
