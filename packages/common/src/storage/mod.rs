mod error;
mod traits;

pub mod memory;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use traits::{Filter, Keyed, RecordStore};
