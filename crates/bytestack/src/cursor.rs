use core::ops::Range;

/// A position inside a region of `capacity` bytes.
///
/// The wrapped offset is always kept in `[0, capacity)`: cursors are built
/// through [`Cursor::START`] or the checked [`Cursor::from_value`] and only
/// move through [`Cursor::advance`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    pub const START: Cursor = Cursor(0);

    pub fn from_value(val: usize, capacity: usize) -> Option<Self> {
        if val < capacity { Some(Self(val)) } else { None }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Moves the cursor `n` bytes forward, wrapping to the start of the
    /// region when it reaches `capacity`.
    #[inline]
    pub fn advance(self, n: usize, capacity: usize) -> Self {
        debug_assert!(self.0 < capacity);

        // Compare against the room left instead of adding first, so that
        // large capacities cannot overflow.
        let step = n % capacity;
        let room = capacity - self.0;
        if step < room {
            Self(self.0 + step)
        } else {
            Self(step - room)
        }
    }

    /// Splits a transfer of `n` bytes starting at this cursor into the
    /// segment that runs up to the end of the region and the segment that
    /// wraps around to offset 0. The second range is empty when the transfer
    /// fits before the end.
    ///
    /// `n` must not exceed `capacity`.
    #[inline]
    pub fn split(self, n: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
        debug_assert!(n <= capacity);
        debug_assert!(self.0 < capacity);

        let room = capacity - self.0;
        if n <= room {
            (self.0..self.0 + n, 0..0)
        } else {
            (self.0..capacity, 0..n - room)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_from_value_last_offset() {
        assert_eq!(Cursor::from_value(7, 8).map(Cursor::index), Some(7));
        assert_eq!(Cursor::from_value(0, 1).map(Cursor::index), Some(0));
    }

    #[test]
    fn test_from_value_out_of_range() {
        assert_eq!(Cursor::from_value(8, 8), None);
        assert_eq!(Cursor::from_value(9, 8), None);
        assert_eq!(Cursor::from_value(0, 0), None);
    }

    #[test]
    fn test_advance_without_wrap() {
        let c = Cursor::START.advance(3, 8);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_advance_lands_on_end_wraps_to_zero() {
        let c = Cursor::from_value(5, 8).unwrap().advance(3, 8);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_advance_across_end() {
        let c = Cursor::from_value(6, 8).unwrap().advance(5, 8);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_advance_full_lap_is_identity() {
        let c = Cursor::from_value(2, 4).unwrap();
        assert_eq!(c.advance(4, 4), c);
        assert_eq!(c.advance(8, 4), c);
    }

    #[test]
    fn test_advance_capacity_1() {
        assert_eq!(Cursor::START.advance(1, 1), Cursor::START);
        assert_eq!(Cursor::START.advance(7, 1), Cursor::START);
    }

    #[test]
    fn test_advance_near_usize_max() {
        let cap = usize::MAX;
        let c = Cursor::from_value(cap - 1, cap).unwrap();
        assert_eq!(c.advance(2, cap).index(), 1);
    }

    #[test]
    fn test_split_fits_before_end() {
        let (head, tail) = Cursor::from_value(1, 8).unwrap().split(4, 8);
        assert_eq!(head, 1..5);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_split_ends_exactly_at_end() {
        let (head, tail) = Cursor::from_value(5, 8).unwrap().split(3, 8);
        assert_eq!(head, 5..8);
        assert!(tail.is_empty());
    }

    #[test]
    fn test_split_across_end() {
        let (head, tail) = Cursor::from_value(6, 8).unwrap().split(5, 8);
        assert_eq!(head, 6..8);
        assert_eq!(tail, 0..3);
    }

    #[test]
    fn test_split_whole_region_from_middle() {
        let (head, tail) = Cursor::from_value(3, 4).unwrap().split(4, 4);
        assert_eq!(head, 3..4);
        assert_eq!(tail, 0..3);
    }
}
