pub mod identity;
pub mod storage;
pub mod transport;

pub use identity::{IdentityProvider, SESSION_KEY};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use transport::{ReservationApi, TransportError, TransportResult};
