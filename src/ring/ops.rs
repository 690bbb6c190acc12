use super::buffer::RingState;
use super::{RingBuf, RingBufInitCfg, RingError};

impl<'a> RingBuf<'a> {
    /// Validates `cfg`, then asks its provider for a control block exactly once.
    ///
    /// Nothing is requested from the provider when the configuration is invalid.
    pub fn create<U>(cfg: RingBufInitCfg<'a, U>) -> Result<Self, RingError> {
        let RingBufInitCfg {
            get_inst_buf,
            mut get_inst_buf_user_data,
            elem_size,
            num_elems,
            buffer,
        } = cfg;

        let Some(get_inst_buf) = get_inst_buf else {
            return Err(RingError::InvalidArgument {
                reason: "get_inst_buf must be provided",
            });
        };
        if elem_size == 0 {
            return Err(RingError::InvalidArgument {
                reason: "elem_size must be greater than zero",
            });
        }
        if num_elems == 0 {
            return Err(RingError::InvalidArgument {
                reason: "num_elems must be greater than zero",
            });
        }
        let Some(buffer) = buffer else {
            return Err(RingError::InvalidArgument {
                reason: "buffer must be provided",
            });
        };
        let Some(required) = elem_size.checked_mul(num_elems) else {
            return Err(RingError::InvalidArgument {
                reason: "num_elems * elem_size overflows usize",
            });
        };
        if buffer.len() < required {
            return Err(RingError::InvalidArgument {
                reason: "buffer is smaller than num_elems * elem_size",
            });
        }

        let inst = get_inst_buf(&mut get_inst_buf_user_data).ok_or(RingError::NoInstance)?;

        let state = inst.state.insert(RingState {
            buffer: &mut buffer[..required],
            elem_size,
            num_elems,
            head: 0,
            tail: 0,
            count: 0,
        });

        Ok(Self { state })
    }

    /// Copies `element` into the next free slot.
    ///
    /// A full buffer is reported as [`RingError::Full`]; nothing is overwritten.
    #[inline]
    pub fn push(&mut self, element: &[u8]) -> Result<(), RingError> {
        let s = &mut *self.state;

        if element.len() != s.elem_size {
            return Err(RingError::InvalidArgument {
                reason: "element length must equal elem_size",
            });
        }
        if s.count == s.num_elems {
            return Err(RingError::Full {
                capacity: s.num_elems,
            });
        }

        let start = s.head * s.elem_size;
        s.buffer[start..start + s.elem_size].copy_from_slice(element);

        s.head = advance(s.head, s.num_elems);
        s.count += 1;
        Ok(())
    }

    /// Copies the oldest element into `element` and frees its slot.
    #[inline]
    pub fn pop(&mut self, element: &mut [u8]) -> Result<(), RingError> {
        let s = &mut *self.state;

        if element.len() != s.elem_size {
            return Err(RingError::InvalidArgument {
                reason: "element length must equal elem_size",
            });
        }
        if s.count == 0 {
            return Err(RingError::Empty);
        }

        let start = s.tail * s.elem_size;
        element.copy_from_slice(&s.buffer[start..start + s.elem_size]);

        s.tail = advance(s.tail, s.num_elems);
        s.count -= 1;
        Ok(())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.state.count
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.state.num_elems
    }

    #[inline(always)]
    pub fn elem_size(&self) -> usize {
        self.state.elem_size
    }

    #[inline(always)]
    pub fn available(&self) -> usize {
        self.state.num_elems - self.state.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.state.count == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.state.count == self.state.num_elems
    }
}

#[inline(always)]
fn advance(idx: usize, num_elems: usize) -> usize {
    let next = idx + 1;
    if next == num_elems { 0 } else { next }
}
