use super::InstanceBuf;

/// Called once by [`RingBuf::create`](super::RingBuf::create) to get the
/// control block for the new instance. Returns `None` when no memory is left.
///
/// The provider must be able to hand out one distinct block per live instance.
pub type GetInstBuf<'a, U> = fn(&mut U) -> Option<&'a mut InstanceBuf<'a>>;

pub struct RingBufInitCfg<'a, U> {
    /// Required.
    pub get_inst_buf: Option<GetInstBuf<'a, U>>,
    /// Passed unchanged to `get_inst_buf`.
    pub get_inst_buf_user_data: U,
    /// Bytes per element. Must be > 0.
    pub elem_size: usize,
    /// Maximum number of elements held at once. Must be > 0.
    pub num_elems: usize,
    /// Element storage of at least `num_elems * elem_size` bytes. Required.
    pub buffer: Option<&'a mut [u8]>,
}

impl<'a, U> RingBufInitCfg<'a, U> {
    pub fn new(
        get_inst_buf: GetInstBuf<'a, U>,
        get_inst_buf_user_data: U,
        elem_size: usize,
        num_elems: usize,
        buffer: &'a mut [u8],
    ) -> Self {
        Self {
            get_inst_buf: Some(get_inst_buf),
            get_inst_buf_user_data,
            elem_size,
            num_elems,
            buffer: Some(buffer),
        }
    }
}
