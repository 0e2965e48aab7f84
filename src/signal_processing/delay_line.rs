use num_traits::Float;

/// Fixed-length history of the most recent samples
///
/// Backed by a ring buffer: pushing a sample overwrites the oldest one, so
/// the length never changes after construction. Index 0 is always the most
/// recently pushed sample.
#[derive(Debug, Clone)]
pub struct DelayLine<T> {
    buffer: Vec<T>,
    head: usize,
}

#[allow(clippy::len_without_is_empty)]
impl<T: Float> DelayLine<T> {
    /// Create a zero-filled delay line holding `len` samples
    ///
    /// `len` must be at least 1; only filter construction, which has already
    /// rejected empty coefficient sets, creates delay lines.
    pub(crate) fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            buffer: vec![T::zero(); len],
            head: 0,
        }
    }

    /// Push a new sample, dropping the oldest one
    pub fn push(&mut self, sample: T) {
        self.head += 1;
        if self.head == self.buffer.len() {
            self.head = 0;
        }
        self.buffer[self.head] = sample;
    }

    /// Sample `delay` steps in the past (0 = most recent)
    pub fn get(&self, delay: usize) -> Option<T> {
        self.iter().nth(delay)
    }

    /// Iterate most-recent-first
    ///
    /// Walks the ring as two contiguous reverse ranges, so no modulo is
    /// needed per element.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let (recent, wrapped) = self.buffer.split_at(self.head + 1);
        recent.iter().rev().chain(wrapped.iter().rev()).copied()
    }

    /// Weighted sum `sum(coeffs[i] * self[i])`, accumulated in index order
    ///
    /// Stops at whichever of `coeffs` and the history is shorter.
    pub fn dot(&self, coeffs: &[T]) -> T {
        coeffs
            .iter()
            .zip(self.iter())
            .fold(T::zero(), |acc, (&c, x)| acc + c * x)
    }

    /// Number of samples held, never zero
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Reset every stored sample to zero
    pub fn clear(&mut self) {
        self.buffer.fill(T::zero());
        self.head = 0;
    }

    /// Copy the history out, most-recent-first
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}
