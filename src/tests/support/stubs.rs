use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::Admin,
    ports::incoming::use_cases::{
        AddAdminCommand, AddAdminError, AddAdminUseCase, DeleteAdminError, DeleteAdminUseCase,
        ListAdminsError, ListAdminsUseCase, LoginAdminError, LoginAdminUseCase, LoginCommand,
        LoginResult,
    },
};
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};
use crate::portfolio::application::{
    domain::entities::{AssetKind, PortfolioFull, PortfolioView},
    ports::incoming::use_cases::{
        AssetPayload, FetchAssetError, FetchAssetUseCase, GetFullPortfolioError,
        GetFullPortfolioUseCase, GetPortfolioUseCase, UploadAssetCommand, UploadAssetError,
        UploadAssetUseCase, UpsertPortfolioCommand, UpsertPortfolioError, UpsertPortfolioUseCase,
    },
};

// Portfolio

#[derive(Default, Clone)]
pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> PortfolioView {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetFullPortfolioUseCase;

#[async_trait]
impl GetFullPortfolioUseCase for StubGetFullPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioFull, GetFullPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertPortfolioUseCase;

#[async_trait]
impl UpsertPortfolioUseCase for StubUpsertPortfolioUseCase {
    async fn execute(&self, _command: UpsertPortfolioCommand) -> Result<i64, UpsertPortfolioError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadAssetUseCase;

#[async_trait]
impl UploadAssetUseCase for StubUploadAssetUseCase {
    async fn execute(&self, _command: UploadAssetCommand) -> Result<i64, UploadAssetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchAssetUseCase;

#[async_trait]
impl FetchAssetUseCase for StubFetchAssetUseCase {
    async fn execute(&self, _kind: AssetKind) -> Result<AssetPayload, FetchAssetError> {
        unimplemented!("Not used in this test")
    }
}

// Auth

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAdminsUseCase;

#[async_trait]
impl ListAdminsUseCase for StubListAdminsUseCase {
    async fn execute(&self) -> Result<Vec<Admin>, ListAdminsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddAdminUseCase;

#[async_trait]
impl AddAdminUseCase for StubAddAdminUseCase {
    async fn execute(&self, _command: AddAdminCommand) -> Result<Admin, AddAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAdminUseCase;

#[async_trait]
impl DeleteAdminUseCase for StubDeleteAdminUseCase {
    async fn execute(&self, _admin_id: Uuid) -> Result<(), DeleteAdminError> {
        unimplemented!("Not used in this test")
    }
}

// Contact

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _command: SubmitContactCommand) -> Result<(), SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}
