//! Chunked readers for consumers of dataset values.

use mdal_core::{DataBuffer, DataType, DatasetRef, MdalError, Result};

/// Elements requested per call when the caller has no preference.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Reads all floating point values of `data_type` from `dataset`.
///
/// Values are requested `chunk_size` elements at a time until a call comes
/// back short. Vector types yield interleaved `x, y` pairs.
pub fn read_doubles(dataset: DatasetRef<'_>, data_type: DataType, chunk_size: usize) -> Result<Vec<f64>> {
    if data_type.is_integer() {
        return Err(MdalError::IncompatibleDataset(format!(
            "{data_type:?} holds integers"
        )));
    }
    let components = data_type.components();
    let chunk_size = chunk_size.max(1);
    let mut values = Vec::new();
    let mut chunk = vec![0.0; chunk_size * components];
    let mut index = 0;
    loop {
        let written = dataset.data(data_type, index, DataBuffer::Double(&mut chunk))?;
        values.extend_from_slice(&chunk[..written * components]);
        index += written;
        if written < chunk_size {
            break;
        }
    }
    log::trace!("read {index} {data_type:?} elements");
    Ok(values)
}

/// Reads all integer values of `data_type` from `dataset`.
pub fn read_integers(dataset: DatasetRef<'_>, data_type: DataType, chunk_size: usize) -> Result<Vec<i32>> {
    if !data_type.is_integer() {
        return Err(MdalError::IncompatibleDataset(format!(
            "{data_type:?} holds doubles"
        )));
    }
    let chunk_size = chunk_size.max(1);
    let mut values = Vec::new();
    let mut chunk = vec![0; chunk_size];
    let mut index = 0;
    loop {
        let written = dataset.data(data_type, index, DataBuffer::Integer(&mut chunk))?;
        values.extend_from_slice(&chunk[..written]);
        index += written;
        if written < chunk_size {
            break;
        }
    }
    log::trace!("read {index} {data_type:?} elements");
    Ok(values)
}
