//! Copying stored values into caller buffers.

/// Copies elements of `source` starting at `index_start` into `buffer`.
///
/// Returns the number of elements copied.
pub(crate) fn copy_values<T: Copy>(source: &[T], index_start: usize, buffer: &mut [T]) -> usize {
    if index_start >= source.len() {
        return 0;
    }
    let count = buffer.len().min(source.len() - index_start);
    buffer[..count].copy_from_slice(&source[index_start..index_start + count]);
    count
}

/// Copies `(x, y)` pairs of an interleaved `source`, starting at pair `index_start`.
///
/// Returns the number of pairs copied.
pub(crate) fn copy_pairs(source: &[f64], index_start: usize, buffer: &mut [f64]) -> usize {
    let pairs = source.len() / 2;
    if index_start >= pairs {
        return 0;
    }
    let count = (buffer.len() / 2).min(pairs - index_start);
    buffer[..count * 2].copy_from_slice(&source[index_start * 2..(index_start + count) * 2]);
    count
}

/// Converts stored counts or indices into the `i32` accessor representation.
pub(crate) fn copy_as_i32(source: &[usize], index_start: usize, buffer: &mut [i32]) -> usize {
    if index_start >= source.len() {
        return 0;
    }
    let count = buffer.len().min(source.len() - index_start);
    for (slot, &value) in buffer.iter_mut().zip(&source[index_start..index_start + count]) {
        *slot = value as i32;
    }
    count
}
