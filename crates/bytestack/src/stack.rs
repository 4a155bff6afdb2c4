use core::fmt;

use crate::cursor::Cursor;
use crate::{Mode, StackError, dev_debug, dev_trace};

/// A fixed-capacity byte queue over a memory region owned by the caller.
///
/// The stack never allocates: it borrows the region for as long as it
/// lives and hands it back through [`ByteStack::into_region`]. Bytes are
/// read in the same order they were pushed. When a push does not fit in
/// the free space, a [`Mode::Fifo`] stack rejects it while a
/// [`Mode::Ring`] stack overwrites the oldest unread bytes.
///
/// The stored data is the `used_space()` bytes starting at the read
/// cursor, wrapping to offset 0 at the end of the region. When the stack
/// is full both cursors point at the same offset.
pub struct ByteStack<'a> {
    region: &'a mut [u8],
    read: Cursor,
    write: Cursor,
    occupied: usize,
    mode: Mode,
}

impl<'a> ByteStack<'a> {
    /// Takes over the first `capacity` bytes of `region`, zeroes them and
    /// returns an empty stack working in `mode`.
    pub fn init(region: &'a mut [u8], capacity: usize, mode: Mode) -> Result<Self, StackError> {
        if region.is_empty() {
            dev_debug!("init rejected: empty region");
            return Err(StackError::NullRegion);
        }

        if capacity == 0 || capacity > region.len() {
            dev_debug!("init rejected: capacity {} for a region of {} bytes", capacity, region.len());
            return Err(StackError::InvalidSize);
        }

        let region = &mut region[..capacity];
        region.fill(0);
        dev_debug!("init {} stack of {} bytes", mode, capacity);

        Ok(Self {
            region,
            read: Cursor::START,
            write: Cursor::START,
            occupied: 0,
            mode,
        })
    }

    /// Same as [`ByteStack::init`], using the whole region.
    #[inline]
    pub fn new(region: &'a mut [u8], mode: Mode) -> Result<Self, StackError> {
        let capacity = region.len();
        Self::init(region, capacity, mode)
    }

    /// Gives the managed region back. Initializing it again is the way to
    /// reset the stack.
    #[inline]
    pub fn into_region(self) -> &'a mut [u8] {
        self.region
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    #[inline(always)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline(always)]
    pub fn used_space(&self) -> usize {
        self.occupied
    }

    /// Bytes that can be pushed without a FIFO rejection or a ring
    /// overwrite.
    #[inline(always)]
    pub fn free_space(&self) -> usize {
        self.capacity() - self.occupied
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    /// Offset of the next byte to be read.
    #[inline(always)]
    pub fn read_cursor(&self) -> usize {
        self.read.index()
    }

    /// Offset of the next byte to be written.
    #[inline(always)]
    pub fn write_cursor(&self) -> usize {
        self.write.index()
    }

    /// The raw managed region, including bytes that are not part of the
    /// stored data. Meant for diagnostics.
    #[inline(always)]
    pub fn region(&self) -> &[u8] {
        self.region
    }

    /// Appends `data` after the newest stored byte.
    ///
    /// In FIFO mode `data` must fit in [`free_space`](Self::free_space). In
    /// ring mode it must fit in [`capacity`](Self::capacity); whatever does
    /// not fit in the free space replaces the oldest stored bytes.
    pub fn push(&mut self, data: &[u8]) -> Result<(), StackError> {
        if data.is_empty() {
            return Err(StackError::NullData);
        }

        let limit = match self.mode {
            Mode::Fifo => self.free_space(),
            Mode::Ring => self.capacity(),
        };
        if data.len() > limit {
            dev_debug!("push of {} bytes rejected: limit is {}", data.len(), limit);
            return Err(StackError::InsufficientSpace);
        }

        let capacity = self.capacity();
        let (head, tail) = self.write.split(data.len(), capacity);
        let (first, second) = data.split_at(head.len());
        self.region[head].copy_from_slice(first);
        self.region[tail].copy_from_slice(second);
        self.write = self.write.advance(data.len(), capacity);

        if self.occupied + data.len() > capacity {
            // Only reachable in ring mode. The copy above already replaced
            // the oldest bytes, so the data now starts right after the
            // newest one.
            dev_trace!("ring overwrite: {} bytes discarded", self.occupied + data.len() - capacity);
            self.read = self.write;
            self.occupied = capacity;
        } else {
            self.occupied += data.len();
        }

        Ok(())
    }

    /// Moves the `len` oldest bytes into `target[..len]`.
    pub fn pop(&mut self, target: &mut [u8], len: usize) -> Result<(), StackError> {
        self.read = self.copy_out(target, len)?;
        self.occupied -= len;
        Ok(())
    }

    /// Copies the `len` oldest bytes into `target[..len]` without removing
    /// them.
    pub fn peek(&self, target: &mut [u8], len: usize) -> Result<(), StackError> {
        self.copy_out(target, len).map(|_| ())
    }

    /// Shared read path of `pop` and `peek`. Returns where the read cursor
    /// would be after consuming the copied bytes; only `pop` commits it.
    fn copy_out(&self, target: &mut [u8], len: usize) -> Result<Cursor, StackError> {
        if target.is_empty() {
            return Err(StackError::NullTarget);
        }

        if len == 0 || len > self.occupied {
            dev_debug!("read of {} bytes rejected: {} stored", len, self.occupied);
            return Err(StackError::InsufficientData);
        }

        if len > target.len() {
            dev_debug!("read of {} bytes rejected: target holds {}", len, target.len());
            return Err(StackError::InvalidSize);
        }

        let capacity = self.capacity();
        let (head, tail) = self.read.split(len, capacity);
        let (first, second) = target[..len].split_at_mut(head.len());
        first.copy_from_slice(&self.region[head]);
        second.copy_from_slice(&self.region[tail]);

        Ok(self.read.advance(len, capacity))
    }
}

impl fmt::Debug for ByteStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteStack")
            .field("mode", &self.mode)
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied)
            .field("read", &self.read.index())
            .field("write", &self.write.index())
            .finish()
    }
}
