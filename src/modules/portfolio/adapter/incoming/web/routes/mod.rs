mod get_asset;
mod get_content;
mod get_full_content;
mod multipart;
mod update_content;
mod upload_asset;

pub use get_asset::{
    __path_get_image_handler, __path_get_resume_handler, get_image_handler, get_resume_handler,
};
pub use get_content::{__path_get_content_handler, get_content_handler};
pub use get_full_content::{__path_get_full_content_handler, get_full_content_handler};
pub use update_content::{
    __path_update_content_handler, update_content_handler, UpdateContentResponse,
};
pub use upload_asset::{
    __path_upload_image_handler, __path_upload_resume_handler, upload_image_handler,
    upload_resume_handler, UploadResponse,
};
