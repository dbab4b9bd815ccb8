pub mod data_uri;
pub mod entities;
pub mod policies;
pub mod system_fields;
