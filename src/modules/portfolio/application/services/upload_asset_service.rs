use async_trait::async_trait;
use std::sync::Arc;

use crate::portfolio::application::{
    domain::entities::PortfolioContent,
    ports::{
        incoming::use_cases::{UploadAssetCommand, UploadAssetError, UploadAssetUseCase},
        outgoing::PortfolioRepository,
    },
};

pub struct UploadAssetService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
    seed: Arc<PortfolioContent>,
}

impl<R> UploadAssetService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R, seed: Arc<PortfolioContent>) -> Self {
        Self { repository, seed }
    }
}

#[async_trait]
impl<R> UploadAssetUseCase for UploadAssetService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, command: UploadAssetCommand) -> Result<i64, UploadAssetError> {
        let (kind, asset) = command.into_parts();

        self.repository
            .store_asset(kind, asset, &self.seed)
            .await
            .map_err(|e| UploadAssetError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::portfolio::application::{
        domain::{data_uri::DataUri, entities::AssetKind, policies::UploadPolicy},
        ports::{
            incoming::use_cases::UploadedFile,
            outgoing::{PortfolioRepositoryError, PortfolioWrite},
        },
    };

    #[derive(Clone, Default)]
    struct RecordingRepository {
        stored: Arc<Mutex<Vec<(AssetKind, DataUri)>>>,
        fail: bool,
    }

    #[async_trait]
    impl PortfolioRepository for RecordingRepository {
        async fn insert_seed_if_absent(
            &self,
            _seed: &PortfolioContent,
        ) -> Result<(), PortfolioRepositoryError> {
            unimplemented!()
        }

        async fn upsert_singleton(
            &self,
            _write: PortfolioWrite,
            _seed: &PortfolioContent,
        ) -> Result<i64, PortfolioRepositoryError> {
            unimplemented!()
        }

        async fn store_asset(
            &self,
            kind: AssetKind,
            asset: DataUri,
            _seed: &PortfolioContent,
        ) -> Result<i64, PortfolioRepositoryError> {
            if self.fail {
                return Err(PortfolioRepositoryError::DatabaseError(
                    "write failed".to_string(),
                ));
            }
            self.stored.lock().unwrap().push((kind, asset));
            Ok(8)
        }
    }

    fn pdf_command(bytes: Vec<u8>) -> UploadAssetCommand {
        UploadAssetCommand::new(
            AssetKind::Resume,
            Some(UploadedFile {
                content_type: Some("application/pdf".to_string()),
                bytes,
                oversized: false,
            }),
            &UploadPolicy::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn stores_encoded_asset_under_its_kind() {
        let repo = RecordingRepository::default();
        let service = UploadAssetService::new(repo.clone(), Arc::new(PortfolioContent::default()));
        let bytes = b"%PDF-1.7 fake".to_vec();

        let version = service.execute(pdf_command(bytes.clone())).await.unwrap();

        assert_eq!(version, 8);
        let stored = repo.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, AssetKind::Resume);
        assert_eq!(stored[0].1.decode().unwrap(), bytes);
    }

    #[tokio::test]
    async fn repository_failure_is_mapped() {
        let repo = RecordingRepository {
            fail: true,
            ..Default::default()
        };
        let service = UploadAssetService::new(repo, Arc::new(PortfolioContent::default()));

        let result = service.execute(pdf_command(vec![1, 2, 3])).await;

        assert!(matches!(result, Err(UploadAssetError::RepositoryError(_))));
    }
}
