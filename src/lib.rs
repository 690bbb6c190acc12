//! Fixed-capacity FIFO ring buffer over caller-supplied storage.
//!
//! The crate never allocates. Element storage is a caller-owned byte slice and
//! the control block for each instance comes from a caller-supplied provider
//! function, so instances can live in `static` arrays, on the stack, or in a
//! memory map (see [`storage::MmapStorage`]).

pub mod ring;
pub mod storage;
