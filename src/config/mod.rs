use derive_with::With;
use log::debug;

/// Histograms are compressed once their centroid count exceeds this ratio
/// times the target accuracy.
pub const DEFAULT_HISTOGRAM_COMPRESS_LIMIT_RATIO: f64 = 2.0;

/// Suggested centroid cap for callers that want one. The builder itself
/// defaults to no cap.
pub const DEFAULT_CENTROIDS_COUNT_LIMIT: i32 = 100;

/// Accuracy used when building a new digest during compression.
pub const DEFAULT_HISTOGRAM_ACCURACY: i32 = 32;

/// Tuning knobs handed to histogram ingestion. Values are carried as given;
/// nothing here is range-checked.
#[derive(derive_new::new, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngesterConfig {
    histogram_centroids_limit: i32,
    target_histogram_accuracy: i32,
    optimize_histograms: bool,
}

impl IngesterConfig {
    pub fn builder() -> IngesterConfigBuilder {
        IngesterConfigBuilder::default()
    }

    pub fn histogram_centroids_limit(&self) -> i32 {
        self.histogram_centroids_limit
    }

    pub fn set_histogram_centroids_limit(&mut self, limit: i32) {
        self.histogram_centroids_limit = limit;
    }

    pub fn target_histogram_accuracy(&self) -> i32 {
        self.target_histogram_accuracy
    }

    pub fn set_target_histogram_accuracy(&mut self, accuracy: i32) {
        self.target_histogram_accuracy = accuracy;
    }

    pub fn optimize_histograms(&self) -> bool {
        self.optimize_histograms
    }

    pub fn set_optimize_histograms(&mut self, optimize: bool) {
        self.optimize_histograms = optimize;
    }
}

impl Default for IngesterConfig {
    fn default() -> Self {
        IngesterConfig::builder().build()
    }
}

#[derive(Debug, Clone, Copy, With)]
pub struct IngesterConfigBuilder {
    histogram_centroids_limit: i32,
    target_histogram_accuracy: i32,
    optimize_histograms: bool,
}

impl Default for IngesterConfigBuilder {
    fn default() -> Self {
        IngesterConfigBuilder {
            // i32::MAX => no centroid limit
            histogram_centroids_limit: i32::MAX,
            target_histogram_accuracy: DEFAULT_HISTOGRAM_ACCURACY,
            optimize_histograms: false,
        }
    }
}

impl IngesterConfigBuilder {
    /// Histograms with more centroids than `limit` are refused downstream.
    pub fn throw_if_too_many_histogram_centroids(self, limit: i32) -> Self {
        self.with_histogram_centroids_limit(limit)
    }

    pub fn build(self) -> IngesterConfig {
        debug!("ingester config built: {:?}", self);
        IngesterConfig::new(
            self.histogram_centroids_limit,
            self.target_histogram_accuracy,
            self.optimize_histograms,
        )
    }
}
