//! Source listings shown in the code pane
//!
//! Every (operation, language) pair has its own listing. Lines that an
//! operation highlights carry a [`Marker`]; operations ask for the marker and
//! never hard-code line numbers, so the three languages can differ in length
//! and layout.

use super::Operation;
use crate::config::Language;

/// Semantic role of a highlighted source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Signature,
    LoopHead,
    Compare,
    ReturnFound,
    ReturnMissing,
    BoundsCheck,
    Read,
    ReturnValue,
    CapacityCheck,
    ShiftLoop,
    ShiftMove,
    Write,
    Resize,
}

type Line = (Option<Marker>, &'static str);

/// A function's source, one entry per line
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub function_name: &'static str,
    lines: &'static [Line],
}

impl Listing {
    pub fn lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lines.iter().map(|(_, text)| *text)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Zero-based line carrying `marker`
    pub fn line_of(&self, marker: Marker) -> Option<usize> {
        self.lines.iter().position(|(m, _)| *m == Some(marker))
    }
}

/// The listing for `operation` in `language`
pub fn listing(operation: Operation, language: Language) -> Listing {
    use Language::*;
    use Operation::*;

    let (function_name, lines) = match (operation, language) {
        (Search, Python) => ("linear_search", SEARCH_PYTHON),
        (Search, Java) => ("linearSearch", SEARCH_JAVA),
        (Search, C) => ("linear_search", SEARCH_C),
        (Access, Python) => ("access", ACCESS_PYTHON),
        (Access, Java) => ("access", ACCESS_JAVA),
        (Access, C) => ("access", ACCESS_C),
        (Insert, Python) => ("insert", INSERT_PYTHON),
        (Insert, Java) => ("insert", INSERT_JAVA),
        (Insert, C) => ("insert", INSERT_C),
        (Delete, Python) => ("delete", DELETE_PYTHON),
        (Delete, Java) => ("delete", DELETE_JAVA),
        (Delete, C) => ("delete", DELETE_C),
    };

    Listing {
        function_name,
        lines,
    }
}

use Marker::*;

const SEARCH_PYTHON: &[Line] = &[
    (Some(Signature), "def linear_search(arr, target):"),
    (Some(LoopHead), "    for i in range(len(arr)):"),
    (Some(Compare), "        if arr[i] == target:"),
    (Some(ReturnFound), "            return i"),
    (Some(ReturnMissing), "    return -1"),
];

const SEARCH_JAVA: &[Line] = &[
    (Some(Signature), "int linearSearch(int[] arr, int target) {"),
    (Some(LoopHead), "    for (int i = 0; i < arr.length; i++) {"),
    (Some(Compare), "        if (arr[i] == target) {"),
    (Some(ReturnFound), "            return i;"),
    (None, "        }"),
    (None, "    }"),
    (Some(ReturnMissing), "    return -1;"),
    (None, "}"),
];

const SEARCH_C: &[Line] = &[
    (Some(Signature), "int linear_search(int arr[], int n, int target) {"),
    (Some(LoopHead), "    for (int i = 0; i < n; i++) {"),
    (Some(Compare), "        if (arr[i] == target) {"),
    (Some(ReturnFound), "            return i;"),
    (None, "        }"),
    (None, "    }"),
    (Some(ReturnMissing), "    return -1;"),
    (None, "}"),
];

const ACCESS_PYTHON: &[Line] = &[
    (Some(Signature), "def access(arr, index):"),
    (Some(BoundsCheck), "    if index < 0 or index >= len(arr):"),
    (None, "        raise IndexError(\"index out of range\")"),
    (Some(Read), "    value = arr[index]"),
    (Some(ReturnValue), "    return value"),
];

const ACCESS_JAVA: &[Line] = &[
    (Some(Signature), "int access(int[] arr, int index) {"),
    (Some(BoundsCheck), "    if (index < 0 || index >= arr.length) {"),
    (None, "        throw new IndexOutOfBoundsException();"),
    (None, "    }"),
    (Some(Read), "    int value = arr[index];"),
    (Some(ReturnValue), "    return value;"),
    (None, "}"),
];

const ACCESS_C: &[Line] = &[
    (Some(Signature), "int access(int arr[], int n, int index) {"),
    (Some(BoundsCheck), "    if (index < 0 || index >= n) {"),
    (None, "        return -1; // out of bounds"),
    (None, "    }"),
    (Some(Read), "    int value = *(arr + index);"),
    (Some(ReturnValue), "    return value;"),
    (None, "}"),
];

const INSERT_PYTHON: &[Line] = &[
    (Some(Signature), "def insert(arr, index, value):"),
    (None, "    arr.append(None)"),
    (Some(ShiftLoop), "    for i in range(len(arr) - 1, index, -1):"),
    (Some(ShiftMove), "        arr[i] = arr[i - 1]"),
    (Some(Write), "    arr[index] = value"),
    (Some(Resize), "    return len(arr)"),
];

const INSERT_JAVA: &[Line] = &[
    (Some(Signature), "int insert(int[] arr, int size, int index, int value) {"),
    (Some(CapacityCheck), "    if (size == arr.length) arr = Arrays.copyOf(arr, size * 2);"),
    (Some(ShiftLoop), "    for (int i = size; i > index; i--) {"),
    (Some(ShiftMove), "        arr[i] = arr[i - 1];"),
    (None, "    }"),
    (Some(Write), "    arr[index] = value;"),
    (Some(Resize), "    return size + 1;"),
    (None, "}"),
];

const INSERT_C: &[Line] = &[
    (Some(Signature), "int insert(int arr[], int *n, int capacity, int index, int value) {"),
    (Some(CapacityCheck), "    if (*n >= capacity) {"),
    (None, "        return -1; // array is full"),
    (None, "    }"),
    (Some(ShiftLoop), "    for (int i = *n; i > index; i--) {"),
    (Some(ShiftMove), "        arr[i] = arr[i - 1];"),
    (None, "    }"),
    (Some(Write), "    arr[index] = value;"),
    (Some(Resize), "    (*n)++;"),
    (None, "    return 0;"),
    (None, "}"),
];

const DELETE_PYTHON: &[Line] = &[
    (Some(Signature), "def delete(arr, index):"),
    (Some(BoundsCheck), "    if index < 0 or index >= len(arr):"),
    (None, "        raise IndexError(\"index out of range\")"),
    (Some(ShiftLoop), "    for i in range(index, len(arr) - 1):"),
    (Some(ShiftMove), "        arr[i] = arr[i + 1]"),
    (Some(Resize), "    arr.pop()"),
];

const DELETE_JAVA: &[Line] = &[
    (Some(Signature), "int delete(int[] arr, int size, int index) {"),
    (Some(BoundsCheck), "    if (index < 0 || index >= size) {"),
    (None, "        throw new IndexOutOfBoundsException();"),
    (None, "    }"),
    (Some(ShiftLoop), "    for (int i = index; i < size - 1; i++) {"),
    (Some(ShiftMove), "        arr[i] = arr[i + 1];"),
    (None, "    }"),
    (Some(Resize), "    return size - 1;"),
    (None, "}"),
];

const DELETE_C: &[Line] = &[
    (Some(Signature), "int delete(int arr[], int *n, int index) {"),
    (Some(BoundsCheck), "    if (index < 0 || index >= *n) {"),
    (None, "        return -1;"),
    (None, "    }"),
    (Some(ShiftLoop), "    for (int i = index; i < *n - 1; i++) {"),
    (Some(ShiftMove), "        arr[i] = arr[i + 1];"),
    (None, "    }"),
    (Some(Resize), "    (*n)--;"),
    (None, "    return 0;"),
    (None, "}"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listing_has_a_signature_on_line_zero() {
        for operation in Operation::ALL {
            for language in Language::ALL {
                let listing = listing(operation, language);
                assert!(!listing.is_empty());
                assert_eq!(listing.line_of(Marker::Signature), Some(0));
            }
        }
    }

    #[test]
    fn test_markers_each_operation_highlights_are_present() {
        let required: &[(Operation, &[Marker])] = &[
            (
                Operation::Search,
                &[Marker::LoopHead, Marker::Compare, Marker::ReturnFound, Marker::ReturnMissing],
            ),
            (
                Operation::Access,
                &[Marker::BoundsCheck, Marker::Read, Marker::ReturnValue],
            ),
            (
                Operation::Insert,
                &[Marker::ShiftLoop, Marker::ShiftMove, Marker::Write, Marker::Resize],
            ),
            (
                Operation::Delete,
                &[Marker::BoundsCheck, Marker::ShiftLoop, Marker::ShiftMove, Marker::Resize],
            ),
        ];

        for (operation, markers) in required {
            for language in Language::ALL {
                let listing = listing(*operation, language);
                for marker in *markers {
                    assert!(
                        listing.line_of(*marker).is_some(),
                        "{:?}/{:?} is missing {:?}",
                        operation,
                        language,
                        marker
                    );
                }
            }
        }
    }

    #[test]
    fn test_only_c_insert_checks_capacity_explicitly() {
        assert!(listing(Operation::Insert, Language::C)
            .line_of(Marker::CapacityCheck)
            .is_some());
        assert!(listing(Operation::Insert, Language::Python)
            .line_of(Marker::CapacityCheck)
            .is_none());
    }
}
