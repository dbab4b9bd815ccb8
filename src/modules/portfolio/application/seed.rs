use crate::portfolio::application::domain::entities::PortfolioContent;

const SEED_CONTENT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/seed/content.json"));

/// Static content used to bootstrap an empty store and as the read fallback
/// when the store is unreachable.
pub fn load_seed_content() -> Result<PortfolioContent, serde_json::Error> {
    serde_json::from_str(SEED_CONTENT)
}
