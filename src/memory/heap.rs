//! Heap view of the array
//!
//! The memory pane mirrors the array as a contiguous block of `int` cells.
//! Each [`HeapCell`] pairs an element's cosmetic address with its value.

use super::{element_address, Address};

/// One addressed element of the array block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapCell {
    pub address: Address,
    pub data: i64,
}

/// Lay out `values` as heap cells starting at [`BASE_ADDRESS`](super::BASE_ADDRESS)
pub fn heap_cells(values: &[i64]) -> Vec<HeapCell> {
    values
        .iter()
        .enumerate()
        .map(|(index, &data)| HeapCell {
            address: element_address(index),
            data,
        })
        .collect()
}

/// Total size in bytes of the block holding `len` elements
pub fn block_size(len: usize) -> usize {
    len * super::INT_SIZE as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BASE_ADDRESS;

    #[test]
    fn test_heap_cells_mirror_array() {
        let cells = heap_cells(&[10, 20, 30]);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], HeapCell { address: BASE_ADDRESS, data: 10 });
        assert_eq!(cells[2].address, BASE_ADDRESS + 8);
        assert_eq!(cells[2].data, 30);
    }

    #[test]
    fn test_empty_array_has_no_cells() {
        assert!(heap_cells(&[]).is_empty());
        assert_eq!(block_size(0), 0);
        assert_eq!(block_size(5), 20);
    }
}
