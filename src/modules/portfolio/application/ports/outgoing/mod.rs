mod portfolio_query;
mod portfolio_repository;

pub use portfolio_query::{PortfolioQuery, PortfolioQueryError, PortfolioSummary};
pub use portfolio_repository::{PortfolioRepository, PortfolioRepositoryError, PortfolioWrite};
