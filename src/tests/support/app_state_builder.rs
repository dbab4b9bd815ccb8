use actix_web::web;
use std::sync::Arc;

use crate::auth::application::{
    auth_use_cases::AuthUseCases,
    ports::incoming::use_cases::{
        AddAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase, LoginAdminUseCase,
    },
};
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::portfolio::application::{
    domain::policies::UploadPolicy,
    portfolio_use_cases::PortfolioUseCases,
    ports::incoming::use_cases::{
        FetchAssetUseCase, GetFullPortfolioUseCase, GetPortfolioUseCase, UploadAssetUseCase,
        UpsertPortfolioUseCase,
    },
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    portfolio: PortfolioUseCases,
    auth: AuthUseCases,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            portfolio: PortfolioUseCases {
                get: Arc::new(StubGetPortfolioUseCase),
                get_full: Arc::new(StubGetFullPortfolioUseCase),
                upsert: Arc::new(StubUpsertPortfolioUseCase),
                upload_asset: Arc::new(StubUploadAssetUseCase),
                fetch_asset: Arc::new(StubFetchAssetUseCase),
            },
            auth: AuthUseCases {
                login: Arc::new(StubLoginAdminUseCase),
                list: Arc::new(StubListAdminsUseCase),
                add: Arc::new(StubAddAdminUseCase),
                delete: Arc::new(StubDeleteAdminUseCase),
            },
            submit_contact: Arc::new(StubSubmitContactUseCase),
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(mut self, uc: impl GetPortfolioUseCase + 'static) -> Self {
        self.portfolio.get = Arc::new(uc);
        self
    }

    pub fn with_get_full_portfolio(mut self, uc: impl GetFullPortfolioUseCase + 'static) -> Self {
        self.portfolio.get_full = Arc::new(uc);
        self
    }

    pub fn with_upsert_portfolio(mut self, uc: impl UpsertPortfolioUseCase + 'static) -> Self {
        self.portfolio.upsert = Arc::new(uc);
        self
    }

    pub fn with_upload_asset(mut self, uc: impl UploadAssetUseCase + 'static) -> Self {
        self.portfolio.upload_asset = Arc::new(uc);
        self
    }

    pub fn with_fetch_asset(mut self, uc: impl FetchAssetUseCase + 'static) -> Self {
        self.portfolio.fetch_asset = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_list_admins(mut self, uc: impl ListAdminsUseCase + 'static) -> Self {
        self.auth.list = Arc::new(uc);
        self
    }

    pub fn with_add_admin(mut self, uc: impl AddAdminUseCase + 'static) -> Self {
        self.auth.add = Arc::new(uc);
        self
    }

    pub fn with_delete_admin(mut self, uc: impl DeleteAdminUseCase + 'static) -> Self {
        self.auth.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(mut self, uc: impl SubmitContactUseCase + 'static) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: self.portfolio,
            auth: self.auth,
            submit_contact: self.submit_contact,
            upload_policy: self.upload_policy,
        })
    }
}
