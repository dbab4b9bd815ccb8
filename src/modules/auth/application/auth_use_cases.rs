use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AddAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase, LoginAdminUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub list: Arc<dyn ListAdminsUseCase + Send + Sync>,
    pub add: Arc<dyn AddAdminUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAdminUseCase + Send + Sync>,
}
