//! Illustrative memory model for the visualized array
//!
//! This module provides the pieces the memory pane renders:
//! - [`stack`]: the single most-recent simulated stack frame of an operation
//! - [`heap`]: the array's contents laid out as addressed heap cells
//!
//! # Addresses
//!
//! Addresses are cosmetic. Elements are `int`s of [`INT_SIZE`] bytes laid out
//! contiguously from [`BASE_ADDRESS`]:
//! ```text
//! &arr[i]  →  BASE_ADDRESS + i * INT_SIZE
//! ```

pub mod heap;
pub mod stack;

/// Memory address type (64-bit)
pub type Address = u64;

/// Address of `arr[0]`
/// Chosen to clearly stand apart from small integers in the panes
pub const BASE_ADDRESS: Address = 0x1000_0000;

/// Size of one element in bytes
pub const INT_SIZE: Address = 4;

/// Address of the element at `index`
pub fn element_address(index: usize) -> Address {
    BASE_ADDRESS + index as Address * INT_SIZE
}

/// Format an address the way every pane shows it
pub fn format_address(address: Address) -> String {
    format!("0x{:08x}", address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_address_scales_by_int_size() {
        assert_eq!(element_address(0), BASE_ADDRESS);
        assert_eq!(element_address(3), BASE_ADDRESS + 12);
    }

    #[test]
    fn test_format_address_is_zero_padded() {
        assert_eq!(format_address(0x10), "0x00000010");
        assert_eq!(format_address(element_address(1)), "0x10000004");
    }
}
