mod add_admin_use_case;
mod delete_admin_use_case;
mod list_admins_use_case;
mod login_admin_use_case;
mod seed_admins_use_case;

pub use add_admin_use_case::{
    AddAdminCommand, AddAdminCommandError, AddAdminError, AddAdminUseCase,
};
pub use delete_admin_use_case::{DeleteAdminError, DeleteAdminUseCase};
pub use list_admins_use_case::{ListAdminsError, ListAdminsUseCase};
pub use login_admin_use_case::{
    LoginAdminError, LoginAdminUseCase, LoginCommand, LoginCommandError, LoginResult,
};
pub use seed_admins_use_case::{SeedAdminsError, SeedAdminsUseCase};
