//! Buffer for holding decimal digits.

use core::ops::Deref;
use core::ops::DerefMut;

use smallvec::SmallVec;

/// Digits kept inline before the buffer spills to the heap. Enough for the
/// 17 significant digits of an exactly formatted `f64`.
const STATIC_ALLOCATION: usize = 24;

/// Buffer of decimal digit values (`0..=9`).
///
/// The buffer itself carries no notion of significance order; the owner
/// decides whether index 0 is the most or the least significant digit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuf {
    inner: SmallVec<[u8; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    /// Returns an empty buffer.
    #[inline]
    pub fn new() -> Self {
        DigitBuf { inner: SmallVec::new() }
    }

    /// Appends a digit to the end of the buffer.
    #[inline]
    pub fn push(&mut self, d: u8) {
        self.inner.push(d);
    }

    /// Removes the last digit and returns it, or None if the buffer is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        self.inner.pop()
    }

    /// Inserts a digit at the beginning of the buffer.
    pub fn prepend(&mut self, d: u8) {
        self.inner.insert(0, d);
    }

    /// Removes all digits.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Removes zero digits from the beginning of the buffer.
    pub fn trunc_leading_zeroes(&mut self) {
        let n = self.inner.iter().take_while(|&&d| d == 0).count();
        let sz = self.inner.len();
        self.inner.rotate_left(n);
        self.inner.truncate(sz - n);
    }

    /// Removes zero digits from the end of the buffer.
    pub fn trunc_trailing_zeroes(&mut self) {
        let n = self.inner.iter().rev().take_while(|&&d| d == 0).count();
        let sz = self.inner.len();
        self.inner.truncate(sz - n);
    }
}

impl Deref for DigitBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [u8] {
        self.inner.deref_mut()
    }
}

impl From<&[u8]> for DigitBuf {
    fn from(digits: &[u8]) -> Self {
        DigitBuf { inner: SmallVec::from_slice(digits) }
    }
}

impl FromIterator<u8> for DigitBuf {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        DigitBuf { inner: iter.into_iter().collect() }
    }
}
