use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::{
    adapter::incoming::web::routes::{AddAdminRequest, LoginRequestDto, LoginResponse},
    application::domain::entities::Admin,
};
use crate::contact::adapter::incoming::web::routes::{ContactRequest, ContactResponse};
use crate::portfolio::{
    adapter::incoming::web::routes::{UpdateContentResponse, UploadResponse},
    application::domain::entities::{
        EducationEntry, Personal, PersonalFull, PersonalView, PortfolioContent, PortfolioFull,
        PortfolioView, ProjectEntry, Social,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content, assets, admin accounts and contact form for the portfolio site"
    ),
    paths(
        // Content
        crate::portfolio::adapter::incoming::web::routes::get_content_handler,
        crate::portfolio::adapter::incoming::web::routes::get_full_content_handler,
        crate::portfolio::adapter::incoming::web::routes::update_content_handler,
        crate::portfolio::adapter::incoming::web::routes::get_image_handler,
        crate::portfolio::adapter::incoming::web::routes::get_resume_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_image_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_resume_handler,

        // Auth
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::list_admins_handler,
        crate::auth::adapter::incoming::web::routes::add_admin_handler,
        crate::auth::adapter::incoming::web::routes::delete_admin_handler,

        // Contact
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Content
            PortfolioContent,
            Personal,
            Social,
            EducationEntry,
            ProjectEntry,
            PortfolioView,
            PersonalView,
            PortfolioFull,
            PersonalFull,
            UpdateContentResponse,
            UploadResponse,

            // Auth
            Admin,
            LoginRequestDto,
            LoginResponse,
            AddAdminRequest,

            // Contact
            ContactRequest,
            ContactResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "content", description = "Portfolio content and assets"),
        (name = "auth", description = "Admin login and account management"),
        (name = "contact", description = "Contact form"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/content",
            "/api/content/full",
            "/api/image",
            "/api/resume",
            "/api/upload",
            "/api/upload-resume",
            "/api/auth/login",
            "/api/auth/admins",
            "/api/contact",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn registers_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
