pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileStoreRepository;
pub use memory::MemoryStoreRepository;
pub use traits::StoreRepository;
