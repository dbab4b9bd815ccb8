mod add_admin;
mod delete_admin;
mod list_admins;
mod login;

pub use add_admin::{__path_add_admin_handler, add_admin_handler, AddAdminRequest};
pub use delete_admin::{__path_delete_admin_handler, delete_admin_handler};
pub use list_admins::{__path_list_admins_handler, list_admins_handler};
pub use login::{__path_login_handler, login_handler, LoginRequestDto, LoginResponse};
