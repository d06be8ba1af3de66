//! A fixed-capacity circular buffer that overwrites its oldest element.

/// A circular buffer holding at most `N` elements.
///
/// Pushing into a full buffer evicts the oldest element. A buffer with zero
/// capacity is rejected at compile time.
///
/// # Example
///
/// ```
/// let mut r = RingBuffer::<u8, 2>::new();
///
/// assert_eq!(r.push(1), None);
/// assert_eq!(r.push(2), None);
/// assert_eq!(r.push(3), Some(1));
/// assert_eq!(r.pop(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    values: [Option<T>; N],
    len: usize,
    read: usize,  // Index of the oldest element.
    write: usize, // Index the next element is written to.
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        const { assert!(N > 0, "A ring buffer must have a capacity above zero.") };

        Self {
            values: core::array::from_fn(|_| None),
            len: 0,
            read: 0,
            write: 0,
        }
    }

    /// Insert a value as the newest element.
    ///
    /// If the buffer is full, the oldest element is overwritten and returned.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            self.read = (self.read + 1) % N;
            self.values[self.write].take()
        } else {
            self.len += 1;
            None
        };

        self.values[self.write] = Some(value);
        self.write = (self.write + 1) % N;

        evicted
    }

    /// Remove and return the oldest element, if any.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // Taking the value leaves the slot empty, so nothing stale is retained.
        let value = self.values[self.read].take();

        self.read = (self.read + 1) % N;
        self.len -= 1;

        value
    }

    /// The number of elements held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// The maximum number of elements held.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
