use memmap2::MmapMut;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Element storage for hosted builds, backed by a memory map.
///
/// The region can be pinned with [`lock`](Self::lock) so pushes and pops never
/// take a page fault.
pub struct MmapStorage {
    map: MmapMut,
    locked: bool,
}

impl MmapStorage {
    pub fn anonymous(len: usize) -> io::Result<Self> {
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Storage length must be greater than zero",
            ));
        }

        Ok(Self {
            map: MmapMut::map_anon(len)?,
            locked: false,
        })
    }

    /// Anonymous storage sized for `num_elems` elements of `elem_size` bytes.
    pub fn for_elements(elem_size: usize, num_elems: usize) -> io::Result<Self> {
        let len = elem_size.checked_mul(num_elems).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "num_elems * elem_size overflows usize",
            )
        })?;
        Self::anonymous(len)
    }

    /// File-backed storage. The file is created or truncated to `len` bytes.
    pub fn create<P: AsRef<Path>>(path: P, len: usize) -> io::Result<Self> {
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "Storage length must be greater than zero",
            ));
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(len as u64)?;

        // SAFETY: the file was just truncated by us; callers must not resize or
        // rewrite it from elsewhere while the map is alive.
        let map = unsafe { MmapMut::map_mut(&file)? };

        Ok(Self { map, locked: false })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.map[..]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.map[..]
    }

    pub fn lock(&mut self) -> io::Result<()> {
        if self.locked {
            return Ok(());
        }

        let result =
            unsafe { libc::mlock(self.map.as_ptr() as *const libc::c_void, self.map.len()) };

        if result == 0 {
            self.locked = true;
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    pub fn unlock(&mut self) -> io::Result<()> {
        if !self.locked {
            return Ok(());
        }

        let result =
            unsafe { libc::munlock(self.map.as_ptr() as *const libc::c_void, self.map.len()) };

        if result == 0 {
            self.locked = false;
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    /// Writes file-backed contents to disk. A no-op for anonymous maps.
    pub fn flush(&self) -> io::Result<()> {
        self.map.flush()
    }
}

impl Drop for MmapStorage {
    fn drop(&mut self) {
        let _ = self.unlock();
    }
}
