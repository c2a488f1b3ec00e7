//! Options shared by the decomposition algorithms.
use crate::cancel::CancellationToken;

/// Configuration for [`crate::decomposition::BucketEliminationAlgorithm`].
///
/// ```rust
/// use hypertree_decomposition::cancel::CancellationToken;
/// use hypertree_decomposition::config::DecompositionConfig;
/// use std::time::Duration;
///
/// let config = DecompositionConfig::default()
///     .with_compression(false)
///     .with_cancellation(CancellationToken::new().with_timeout(Duration::from_secs(5)));
/// assert!(!config.compress);
/// ```
#[derive(Debug, Clone)]
pub struct DecompositionConfig {
    /// Remove nodes whose bag is redundant after materialization.
    pub compress: bool,
    pub cancellation: Option<CancellationToken>,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        DecompositionConfig {
            compress: true,
            cancellation: None,
        }
    }
}

impl DecompositionConfig {
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}
