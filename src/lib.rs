pub mod config;
pub mod error;
pub mod utils;

pub use config::{IngesterConfig, IngesterConfigBuilder};
pub use error::{IngestError, IngestResult};
pub use utils::ring_buffer::{OverflowPolicy, RingBuffer};
pub use utils::sync_ring_buffer::SyncRingBuffer;
