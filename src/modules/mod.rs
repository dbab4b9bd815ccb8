pub mod auth;
pub mod contact;
pub mod email;
pub mod portfolio;
