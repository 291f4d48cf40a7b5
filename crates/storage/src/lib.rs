#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    InMemoryRepository, ProgressRecord, ProgressRepository, Storage, StorageError, UserRecord,
    UserRepository,
};
