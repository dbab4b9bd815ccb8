mod add_admin_service;
mod delete_admin_service;
mod list_admins_service;
mod login_admin_service;
mod seed_admins_service;

pub use add_admin_service::AddAdminService;
pub use delete_admin_service::DeleteAdminService;
pub use list_admins_service::ListAdminsService;
pub use login_admin_service::LoginAdminService;
pub use seed_admins_service::{load_seed_admins, SeedAdminsService};
