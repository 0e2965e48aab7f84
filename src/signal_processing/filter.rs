/// Common trait for sample-by-sample filters
///
/// Implemented by `DigitalFilter`.
pub trait Filter<T: Copy> {
    /// Process a single sample through the filter
    fn process(&mut self, sample: T) -> T;

    /// Process a buffer of samples in-place
    fn process_buffer(&mut self, buffer: &mut [T]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear all internal history
    fn reset(&mut self);
}
