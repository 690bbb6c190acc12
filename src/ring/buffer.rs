/// Control state of one ring buffer. Lives inside an [`InstanceBuf`].
#[derive(Debug)]
pub(crate) struct RingState<'a> {
    pub(crate) buffer: &'a mut [u8],
    pub(crate) elem_size: usize,
    pub(crate) num_elems: usize,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) count: usize,
}

/// Memory block for one ring buffer's control state.
///
/// The library never allocates these itself. Callers hand them out from an
/// instance provider, typically backed by a `static` or stack array:
///
/// ```
/// use ringbuf_static::ring::InstanceBuf;
///
/// let mut slots = [InstanceBuf::EMPTY, InstanceBuf::EMPTY];
/// # let _ = &mut slots;
/// ```
#[derive(Debug, Default)]
pub struct InstanceBuf<'a> {
    pub(crate) state: Option<RingState<'a>>,
}

impl<'a> InstanceBuf<'a> {
    pub const EMPTY: Self = Self { state: None };

    pub const fn new() -> Self {
        Self::EMPTY
    }
}

/// Handle to a created ring buffer. Borrows both its control block and its
/// element storage for `'a`.
#[derive(Debug)]
pub struct RingBuf<'a> {
    pub(crate) state: &'a mut RingState<'a>,
}
