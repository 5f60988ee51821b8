pub mod availability;
pub mod pipeline;
pub mod providers;
pub mod record_builder;
pub mod snapshot;
pub mod trending;

pub use availability::ProviderResolver;
pub use pipeline::{run, run_snapshot};
pub use providers::{CatalogProvider, TmdbProvider};
pub use record_builder::RecordBuilder;
pub use snapshot::{SnapshotProfile, SnapshotWriter, WrittenSnapshot};
