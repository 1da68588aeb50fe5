//! Array-backed data structures with indexed mutation support
//!
//! This crate provides a small set of classic data structures built on
//! contiguous storage, centered on a binary max-heap that supports more than
//! the usual push/pop surface:
//!
//! - **[`MaxHeap`]**: array-backed binary max-heap with O(log n) insert and
//!   extract-max, removal at an arbitrary index, removal by value, in-place
//!   key increase/decrease with directional reheapify, and linear-scan
//!   minimum extraction over the leaf region
//! - **[`SinglyLinkedList`]**: owned singly linked list with front/back and
//!   positional insertion, removal by value, and borrowing iteration
//! - **[`sorting`]**: in-place merge sort, quick sort, and heap sort over
//!   mutable slices, with a criterion benchmark comparing the three
//!
//! # Example
//!
//! ```rust
//! use array_heaps::MaxHeap;
//!
//! let mut heap = MaxHeap::from_unordered(vec![3, 1, 6, 5, 2, 4]);
//! assert_eq!(heap.peek_max(), Ok(&6));
//!
//! heap.push(10);
//! assert_eq!(heap.pop_max(), Ok(10));
//! assert_eq!(heap.pop_min(), Ok(1));
//! assert!(heap.is_heap());
//! ```

pub mod linked_list;
pub mod max_heap;
pub mod sorting;

// Re-export the main types for convenience
pub use linked_list::{ListError, SinglyLinkedList};
pub use max_heap::{HeapError, MaxHeap};
