use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_RANKING_SIZE: usize = 5;

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, Clone)]
#[into_params(parameter_in = Query)]
pub struct ProductRankingQuery {
    /// Number of products to return, defaults to 5.
    pub n: Option<usize>,
}

impl ProductRankingQuery {
    pub fn size(&self) -> usize {
        self.n.unwrap_or(DEFAULT_RANKING_SIZE)
    }
}
