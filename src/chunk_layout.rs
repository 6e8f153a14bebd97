use std::num::NonZero;

/// One part of a multipart upload: a byte range of the source file plus the
/// part number the gateway expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSpan {
    /// S3 part numbers start at 1
    pub number: i32,
    pub offset: u64,
    pub len: u64,
}

/// Split a file of `file_size` bytes into sequential spans of at most
/// `part_size` bytes. Every span except possibly the last is exactly
/// `part_size` long, and the spans cover the file with no gaps or overlap.
pub fn part_spans(file_size: u64, part_size: NonZero<u64>) -> Vec<PartSpan> {
    let part_size = part_size.get();
    (0..file_size.div_ceil(part_size))
        .map(|index| {
            let offset = index * part_size;
            PartSpan {
                number: index as i32 + 1,
                offset,
                len: part_size.min(file_size - offset),
            }
        })
        .collect()
}
