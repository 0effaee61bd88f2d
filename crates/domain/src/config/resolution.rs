use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Maximum number of CNAME hops followed for one question.
    #[serde(default = "default_max_cname_depth")]
    pub max_cname_depth: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_cname_depth: default_max_cname_depth(),
        }
    }
}

fn default_max_cname_depth() -> usize {
    8
}
