pub mod auth;
pub mod realtime;
pub mod repositories;
pub mod storage;

pub use repositories::memory::MemoryBackend;
pub use repositories::traits::{RepoError, RepoResult};
pub use repositories::Backend;
