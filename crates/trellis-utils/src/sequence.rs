//! Null-safe sequence helpers
//!
//! An absent sequence is modelled as `None`. Every helper treats `None` as an
//! empty sequence, except [`NullSafeExt::take_page`], which reports an absent
//! source as [`Error::InvalidArgument`].
//!
//! ## Example
//!
//! ```
//! use trellis_utils::sequence::NullSafeExt;
//!
//! let missing: Option<Vec<i32>> = None;
//! assert!(missing.clone().is_none_or_empty());
//! assert_eq!(missing.clone().null_safe_count(), 0);
//! assert_eq!(missing.null_safe_map(|n| n * 2).count(), 0);
//!
//! let present = Some(vec![1, 2, 3, 4, 5]);
//! let page: Vec<i32> = present.take_page(2, 2).unwrap().collect();
//! assert_eq!(page, vec![3, 4]);
//! ```

use std::iter::{Filter, Flatten, Map, Skip, Take};
use trellis_core::exception::{Error, Result};

type Flat<I> = Flatten<std::option::IntoIter<I>>;

const MAX_PREALLOCATED_BATCH: usize = 1024;

/// Number of elements to skip to reach the start of a 1-based page.
///
/// Page `0` is treated like page `1`.
///
/// # Examples
///
/// ```
/// use trellis_utils::sequence::page_offset;
///
/// assert_eq!(page_offset(1, 10), 0);
/// assert_eq!(page_offset(3, 10), 20);
/// assert_eq!(page_offset(0, 10), 0);
/// ```
pub fn page_offset(page: usize, page_size: usize) -> usize {
	page.saturating_sub(1).saturating_mul(page_size)
}

/// Helpers on possibly-absent sequences.
pub trait NullSafeExt<I: IntoIterator>: Sized {
	/// `true` if the sequence is absent or has no elements.
	fn is_none_or_empty(self) -> bool;

	/// Number of elements; `0` when absent.
	fn null_safe_count(self) -> usize;

	/// `true` if any element satisfies `predicate`; `false` when absent.
	fn null_safe_any<P>(self, predicate: P) -> bool
	where
		P: FnMut(I::Item) -> bool;

	/// Elements satisfying `predicate`; empty when absent.
	fn null_safe_filter<P>(self, predicate: P) -> Filter<Flat<I>, P>
	where
		P: FnMut(&I::Item) -> bool;

	/// Elements transformed by `selector`; empty when absent.
	fn null_safe_map<B, F>(self, selector: F) -> Map<Flat<I>, F>
	where
		F: FnMut(I::Item) -> B;

	/// Up to `page_size` elements starting at the 1-based `page`.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] when the sequence is absent.
	fn take_page(self, page: usize, page_size: usize) -> Result<Take<Skip<I::IntoIter>>>;

	/// Calls `action` once per consecutive slice of `batch_size` elements,
	/// including a final shorter slice. Does nothing when absent.
	fn batch_for_each<F>(self, batch_size: usize, action: F)
	where
		F: FnMut(Vec<I::Item>);
}

impl<I: IntoIterator> NullSafeExt<I> for Option<I> {
	fn is_none_or_empty(self) -> bool {
		match self {
			Some(source) => source.into_iter().next().is_none(),
			None => true,
		}
	}

	fn null_safe_count(self) -> usize {
		self.into_iter().flatten().count()
	}

	fn null_safe_any<P>(self, predicate: P) -> bool
	where
		P: FnMut(I::Item) -> bool,
	{
		self.into_iter().flatten().any(predicate)
	}

	fn null_safe_filter<P>(self, predicate: P) -> Filter<Flat<I>, P>
	where
		P: FnMut(&I::Item) -> bool,
	{
		self.into_iter().flatten().filter(predicate)
	}

	fn null_safe_map<B, F>(self, selector: F) -> Map<Flat<I>, F>
	where
		F: FnMut(I::Item) -> B,
	{
		self.into_iter().flatten().map(selector)
	}

	fn take_page(self, page: usize, page_size: usize) -> Result<Take<Skip<I::IntoIter>>> {
		match self {
			Some(source) => Ok(source.into_iter().take_page(page, page_size)),
			None => Err(Error::invalid_argument("source", "sequence is absent")),
		}
	}

	fn batch_for_each<F>(self, batch_size: usize, action: F)
	where
		F: FnMut(Vec<I::Item>),
	{
		if let Some(source) = self {
			source.into_iter().batch_for_each(batch_size, action);
		}
	}
}

/// Pagination and batching on present sequences.
pub trait PageExt: Iterator + Sized {
	/// Skips `(page - 1) * page_size` elements and yields up to `page_size`.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_utils::sequence::PageExt;
	///
	/// let page: Vec<_> = (1..=10).take_page(4, 3).collect();
	/// assert_eq!(page, vec![10]);
	///
	/// assert_eq!((1..=10).take_page(5, 3).count(), 0);
	/// ```
	fn take_page(self, page: usize, page_size: usize) -> Take<Skip<Self>> {
		self.skip(page_offset(page, page_size)).take(page_size)
	}

	/// Calls `action` once per consecutive slice of `batch_size` elements.
	///
	/// A `batch_size` of zero performs no invocations.
	///
	/// # Examples
	///
	/// ```
	/// use trellis_utils::sequence::PageExt;
	///
	/// let mut batches = Vec::new();
	/// (1..=5).batch_for_each(2, |batch| batches.push(batch));
	/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
	/// ```
	fn batch_for_each<F>(self, batch_size: usize, mut action: F)
	where
		F: FnMut(Vec<Self::Item>),
	{
		if batch_size == 0 {
			tracing::warn!("batch_for_each called with a batch size of zero");
			return;
		}

		let capacity = batch_size.min(MAX_PREALLOCATED_BATCH);
		let mut batch = Vec::with_capacity(capacity);
		for item in self {
			batch.push(item);
			if batch.len() == batch_size {
				action(std::mem::replace(&mut batch, Vec::with_capacity(capacity)));
			}
		}
		if !batch.is_empty() {
			action(batch);
		}
	}
}

impl<T: Iterator> PageExt for T {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_absent_sequence_defaults() {
		let absent: Option<Vec<u8>> = None;
		assert!(absent.clone().is_none_or_empty());
		assert_eq!(absent.clone().null_safe_count(), 0);
		assert!(!absent.clone().null_safe_any(|_| true));
		assert_eq!(absent.clone().null_safe_filter(|_| true).count(), 0);
		assert_eq!(absent.null_safe_map(|b| b as u32).count(), 0);
	}

	#[rstest]
	fn test_present_sequence() {
		let present = Some(vec![1, 2, 3, 4]);
		assert!(!present.clone().is_none_or_empty());
		assert!(Some(Vec::<i32>::new()).is_none_or_empty());
		assert_eq!(present.clone().null_safe_count(), 4);
		assert!(present.clone().null_safe_any(|n| n > 3));
		assert!(!present.clone().null_safe_any(|n| n > 4));
		assert_eq!(
			present.clone().null_safe_filter(|n| n % 2 == 0).collect::<Vec<_>>(),
			vec![2, 4]
		);
		assert_eq!(
			present.null_safe_map(|n| n.to_string()).collect::<Vec<_>>(),
			vec!["1", "2", "3", "4"]
		);
	}

	#[rstest]
	fn test_take_page_absent_source_fails() {
		let absent: Option<Vec<i32>> = None;
		let err = absent.take_page(1, 10).unwrap_err();
		assert!(err.is_invalid_argument());
	}

	#[rstest]
	#[case(1, 3, vec![1, 2, 3])]
	#[case(2, 3, vec![4, 5, 6])]
	#[case(4, 3, vec![10])]
	#[case(5, 3, vec![])]
	#[case(0, 3, vec![1, 2, 3])]
	#[case(2, 0, vec![])]
	fn test_take_page(#[case] page: usize, #[case] size: usize, #[case] expected: Vec<i32>) {
		let source = Some((1..=10).collect::<Vec<i32>>());
		let result: Vec<i32> = source.take_page(page, size).unwrap().collect();
		assert_eq!(result, expected);
	}

	#[rstest]
	fn test_batch_for_each_absent_is_noop() {
		let absent: Option<Vec<i32>> = None;
		let mut calls = 0;
		absent.batch_for_each(2, |_| calls += 1);
		assert_eq!(calls, 0);
	}

	#[rstest]
	fn test_batch_for_each_zero_size_is_noop() {
		let mut calls = 0;
		Some(vec![1, 2, 3]).batch_for_each(0, |_| calls += 1);
		assert_eq!(calls, 0);
	}

	#[rstest]
	fn test_batch_for_each_exact_multiple() {
		let mut batches = Vec::new();
		Some(vec!['a', 'b', 'c', 'd']).batch_for_each(2, |b| batches.push(b));
		assert_eq!(batches, vec![vec!['a', 'b'], vec!['c', 'd']]);
	}
}
