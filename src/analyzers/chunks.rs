/// Partitioning of a token sequence into fixed-size windows.
use crate::analyzers::types::ChunkRange;
use std::num::NonZeroUsize;

/// Split `[0, token_count)` into consecutive windows of `chunk_size` tokens.
///
/// The last window holds whatever remains, so there are
/// `ceil(token_count / chunk_size)` chunks, returned in ascending order.
pub fn partition(token_count: usize, chunk_size: NonZeroUsize) -> Vec<ChunkRange> {
    let size = chunk_size.get();
    let num_chunks = token_count.div_ceil(size);

    (0..num_chunks)
        .map(|index| {
            let start = index * size;
            let end = (start + size).min(token_count);
            ChunkRange {
                index,
                start,
                end,
                percentage: round_to_tenth((end - start) as f64 / token_count as f64 * 100.0),
            }
        })
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
