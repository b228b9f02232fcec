//! Traversal and query operations over the live window.
//!
//! Search values coerce exactly like `set` before any comparison; a
//! needle with no representation in the buffer's value kind matches
//! nothing. Write paths (`fill`, `map`) fail loudly instead.

use crate::buffer::TypedBuffer;
use crate::element::Element;
use crate::error::BufferError;
use crate::value::Value;

impl<E: Element> TypedBuffer<E> {
    fn coerce_needle(value: impl Into<Value>) -> Option<E> {
        E::from_value(&value.into()).ok()
    }

    /// Index of the first element equal to `value` under the coercion
    /// rule.
    pub fn index_of(&self, value: impl Into<Value>) -> Option<usize> {
        let needle = Self::coerce_needle(value)?;
        self.as_slice().iter().position(|x| *x == needle)
    }

    /// Index of the last element equal to `value` under the coercion
    /// rule.
    pub fn last_index_of(&self, value: impl Into<Value>) -> Option<usize> {
        let needle = Self::coerce_needle(value)?;
        self.as_slice().iter().rposition(|x| *x == needle)
    }

    /// Whether any element equals `value` under the coercion rule.
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        self.index_of(value).is_some()
    }

    /// Reverse the live window in place.
    pub fn reverse(&mut self) {
        self.window_mut().reverse();
    }

    /// Store the coerced `value` into every slot of `[start, end)`.
    ///
    /// Bounds normalize and clamp like [`TypedBuffer::slice`].
    pub fn fill(
        &mut self,
        value: impl Into<Value>,
        start: isize,
        end: isize,
    ) -> Result<(), BufferError> {
        let element = E::from_value(&value.into())?;
        let (s, e) = self.normalize_range(start, end);
        for slot in &mut self.window_mut()[s..e] {
            *slot = element;
        }
        Ok(())
    }

    /// First element satisfying `pred`.
    pub fn find(&self, mut pred: impl FnMut(&E) -> bool) -> Option<E> {
        self.as_slice().iter().copied().find(|x| pred(x))
    }

    /// Index of the first element satisfying `pred`.
    pub fn find_index(&self, mut pred: impl FnMut(&E) -> bool) -> Option<usize> {
        self.as_slice().iter().position(|x| pred(x))
    }

    /// Last element satisfying `pred`.
    pub fn find_last(&self, mut pred: impl FnMut(&E) -> bool) -> Option<E> {
        self.as_slice().iter().copied().rev().find(|x| pred(x))
    }

    /// Index of the last element satisfying `pred`.
    pub fn find_last_index(&self, mut pred: impl FnMut(&E) -> bool) -> Option<usize> {
        self.as_slice().iter().rposition(|x| pred(x))
    }

    /// Whether every element satisfies `pred`.
    pub fn all(&self, mut pred: impl FnMut(&E) -> bool) -> bool {
        self.as_slice().iter().all(|x| pred(x))
    }

    /// Whether at least one element satisfies `pred`.
    pub fn any(&self, mut pred: impl FnMut(&E) -> bool) -> bool {
        self.as_slice().iter().any(|x| pred(x))
    }

    /// New buffer holding the elements that satisfy `pred`, in order.
    #[must_use]
    pub fn filter(&self, mut pred: impl FnMut(&E) -> bool) -> Self {
        let kept: Vec<E> = self.as_slice().iter().copied().filter(|x| pred(x)).collect();
        Self::from_slice(&kept)
    }

    /// New buffer with `f` applied to every element.
    ///
    /// Copy-and-return semantics: the source is untouched. Each
    /// produced value passes through the same coercion as `set`, so
    /// this can fail with `InvalidType` on a big-integer buffer.
    pub fn map<V: Into<Value>>(
        &self,
        mut f: impl FnMut(E, usize) -> V,
    ) -> Result<Self, BufferError> {
        let mut out = Vec::with_capacity(self.len());
        for (i, &x) in self.as_slice().iter().enumerate() {
            out.push(E::from_value(&f(x, i).into())?);
        }
        Ok(Self::from_slice(&out))
    }

    /// Visit every element in order with its window index.
    pub fn for_each(&self, mut f: impl FnMut(E, usize)) {
        for (i, &x) in self.as_slice().iter().enumerate() {
            f(x, i);
        }
    }

    /// Left fold over the live window.
    pub fn fold<A>(&self, init: A, mut f: impl FnMut(A, E) -> A) -> A {
        self.as_slice().iter().fold(init, |acc, &x| f(acc, x))
    }

    /// Right fold over the live window.
    pub fn rfold<A>(&self, init: A, mut f: impl FnMut(A, E) -> A) -> A {
        self.as_slice().iter().rfold(init, |acc, &x| f(acc, x))
    }

    /// Join the elements' logical values with `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, &x) in self.as_slice().iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&x.into_value().to_string());
        }
        out
    }

    /// New buffer holding this window followed by `other`'s.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut joined = self.to_vec();
        joined.extend_from_slice(other.as_slice());
        Self::from_slice(&joined)
    }

    /// Iterator over the live window.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}

impl<'a, E: Element> IntoIterator for &'a TypedBuffer<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
