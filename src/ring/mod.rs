pub mod buffer;
pub mod config;
pub mod ops;
pub mod pool;
pub mod ring_error;

pub use buffer::{InstanceBuf, RingBuf};
pub use config::{GetInstBuf, RingBufInitCfg};
pub use pool::InstancePool;
pub use ring_error::*;
