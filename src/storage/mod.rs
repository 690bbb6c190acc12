pub mod mmap_storage;

pub use mmap_storage::MmapStorage;
