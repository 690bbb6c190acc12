use super::InstanceBuf;
use std::slice::IterMut;

/// Hands out the control blocks of a caller-owned array, one per `create`,
/// and reports exhaustion once every slot is taken.
///
/// ```
/// use ringbuf_static::ring::{InstanceBuf, InstancePool, RingBuf, RingBufInitCfg};
///
/// let mut storage = [0u8; 8];
/// let mut slots = [InstanceBuf::EMPTY];
/// let mut pool = InstancePool::new(&mut slots);
///
/// let cfg = RingBufInitCfg::new(InstancePool::get_inst_buf, &mut pool, 2, 4, &mut storage);
/// let mut ring = RingBuf::create(cfg).unwrap();
///
/// ring.push(&[1, 2]).unwrap();
/// let mut out = [0u8; 2];
/// ring.pop(&mut out).unwrap();
/// assert_eq!(out, [1, 2]);
/// ```
#[derive(Debug)]
pub struct InstancePool<'a> {
    slots: IterMut<'a, InstanceBuf<'a>>,
}

impl<'a> InstancePool<'a> {
    pub fn new(slots: &'a mut [InstanceBuf<'a>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn take(&mut self) -> Option<&'a mut InstanceBuf<'a>> {
        self.slots.next()
    }

    /// Provider function for [`RingBufInitCfg`](super::RingBufInitCfg), with
    /// `&mut InstancePool` as the user data.
    pub fn get_inst_buf(pool: &mut &mut InstancePool<'a>) -> Option<&'a mut InstanceBuf<'a>> {
        pool.take()
    }
}
