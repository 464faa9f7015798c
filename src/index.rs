//! Genericity over buffer index types.
//!
//! [`GrowBuf`](crate::GrowBuf) stores its length and cursor as an
//! implementor of [`BufIndex`] (defaulting to `usize`). Specifying a
//! smaller type, such as `u32` or even `u8`, can aid in struct size
//! optimization; it is also possible to [declare new index
//! types](crate::index_type!), leveraging the type system to avoid using
//! the wrong kind of index.

/// Two-way conversion between `Self` and `usize`.
///
/// Implementations must be each other's inverse:
/// `I::checked_from_usize(i)` either evaluates to `Some(x)` with
/// `x.into_usize() == i`, or to [`None`] because `i` is out of range
/// for `I`.
///
/// Using [`index_type!`](crate::index_type!) should be preferred over
/// implementing this manually.
pub trait BufIndex: Copy {
    /// Converts a `usize` into `Self`, returning [`None`] if the value
    /// is out of range.
    fn checked_from_usize(i: usize) -> Option<Self>;

    /// Converts a `usize` into `Self`, panicking if the value is out of range.
    #[inline]
    #[track_caller]
    fn from_usize(i: usize) -> Self {
        match Self::checked_from_usize(i) {
            Some(x) => x,
            None => from_value_out_of_range(i),
        }
    }

    /// Converts `self` into `usize`, panicking if the value is out of range.
    fn into_usize(self) -> usize;
}

#[inline(never)]
#[cold]
#[track_caller]
fn from_value_out_of_range(i: usize) -> ! {
    panic!("called `from_usize` with value out of range (is {})", i)
}

#[inline(never)]
#[cold]
#[track_caller]
fn into_value_out_of_range() -> ! {
    panic!("called `into_usize` with value out of range")
}

macro_rules! impl_buf_index {
    ($($t:ty),* $(,)?) => {$(
        impl BufIndex for $t {
            #[inline]
            fn checked_from_usize(i: usize) -> Option<Self> {
                i.try_into().ok()
            }

            #[inline]
            #[track_caller]
            fn into_usize(self) -> usize {
                match self.try_into() {
                    Ok(x) => x,
                    Err(_) => into_value_out_of_range(),
                }
            }
        }
    )*};
}

impl_buf_index! { u8, u16, u32, u64, usize }

/// Generates a newtype wrapping an implementor of [`BufIndex`].
///
/// This can help in avoiding use of the wrong index with a
/// [`GrowBuf`](crate::GrowBuf).
///
/// # Examples
/// ```compile_fail
/// use growbuf::{index_type, GrowBuf};
///
/// index_type! { pub IndexA: u8 }
/// index_type! { IndexB: u8 }
///
/// let mut buf_a = GrowBuf::<u32, IndexA>::with_capacity(8).unwrap();
/// let mut buf_b = GrowBuf::<u32, IndexB>::with_capacity(8).unwrap();
/// buf_a.try_push(1).unwrap();
/// buf_b.try_push(2).unwrap();
///
/// let a = buf_a.get(IndexA(0));
/// let b = buf_b.get(IndexB(0));
/// let c = buf_a.get(IndexB(0));
/// //      ^^^^^^^^^^^^^^^^^^^^ expected `IndexA`, found `IndexB`
/// ```
#[macro_export]
macro_rules! index_type {
    ($v:vis $name:ident: $repr:ty) => {
        #[derive(
            core::marker::Copy,
            core::clone::Clone,
            core::default::Default,
            core::fmt::Debug,
            core::hash::Hash,
            core::cmp::PartialEq,
            core::cmp::Eq,
            core::cmp::PartialOrd,
            core::cmp::Ord)]
        $v struct $name($v $repr);

        impl $crate::index::BufIndex for $name {
            #[inline]
            fn checked_from_usize(i: usize) -> core::option::Option<Self> {
                <$repr as $crate::index::BufIndex>::checked_from_usize(i).map(Self)
            }

            #[inline]
            #[track_caller]
            fn into_usize(self) -> usize {
                <$repr as $crate::index::BufIndex>::into_usize(self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        assert_eq!(u8::from_usize(255).into_usize(), 255);
        assert_eq!(u16::from_usize(1000).into_usize(), 1000);
        assert_eq!(u64::from_usize(1 << 40).into_usize(), 1 << 40);
        assert_eq!(usize::from_usize(usize::MAX).into_usize(), usize::MAX);
    }

    #[test]
    #[should_panic(expected = "value out of range")]
    fn narrow_conversion_panics() {
        let _ = u8::from_usize(256);
    }

    #[test]
    fn checked_conversion_reports_overflow() {
        assert_eq!(u8::checked_from_usize(255), Some(255));
        assert_eq!(u8::checked_from_usize(256), None);
        assert_eq!(u16::checked_from_usize(1 << 16), None);
        assert_eq!(usize::checked_from_usize(usize::MAX), Some(usize::MAX));
    }

    #[test]
    fn newtype_indices() {
        index_type! { SlotId: u16 }

        assert_eq!(SlotId::from_usize(42), SlotId(42));
        assert_eq!(SlotId(42).into_usize(), 42);
    }
}
