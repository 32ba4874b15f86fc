//! A value or the error explaining why there is none.
//!
//! [`Expected`] is a two-state sum type. Unlike [`Result`] it is built with
//! explicit tags ([`InPlace`], [`Unexpect`]) or the [`Unexpected`] wrapper,
//! and checked access through [`Expected::value`] reports the error as a
//! [`BadExpectedAccess`].
//!
//! # Examples
//! ```
//! use expected::{Expected, Unexpected};
//!
//! let ok: Expected<i32, String> = Expected::in_place(7);
//! let ng: Expected<i32, String> = Unexpected::new("err".to_owned()).into();
//!
//! assert_eq!(ok.value(), Ok(&7));
//! assert_eq!(ng.value().unwrap_err().error(), "err");
//! assert_eq!(ok.value_or(42), 7);
//! assert_eq!(ng.value_or(42), 42);
//! ```

use std::ops::{Deref, DerefMut};

/// Tag selecting the value alternative.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InPlace;

/// Tag selecting the error alternative.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Unexpect;

/// Marks a payload as the error alternative.
#[derive(Clone, Copy, Debug, Default, Eq, Hash)]
pub struct Unexpected<E>(E);

impl<E> Unexpected<E> {
    pub fn new(error: E) -> Self { Self(error) }
    pub fn value(&self) -> &E { &self.0 }
    pub fn value_mut(&mut self) -> &mut E { &mut self.0 }
    pub fn into_value(self) -> E { self.0 }
}

impl<E: PartialEq<E2>, E2> PartialEq<Unexpected<E2>> for Unexpected<E> {
    fn eq(&self, other: &Unexpected<E2>) -> bool { self.0 == other.0 }
}

/// Checked access to the value of an [`Expected`] holding an error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("bad expected access: the instance holds an error")]
pub struct BadExpectedAccess<E> {
    error: E,
}

impl<E> BadExpectedAccess<E> {
    pub fn new(error: E) -> Self { Self { error } }
    pub fn error(&self) -> &E { &self.error }
    pub fn into_error(self) -> E { self.error }
}

#[derive(Clone, Copy, Debug, Hash)]
pub enum Expected<V, E> {
    Value(V),
    Error(E),
}

use Expected::{Error, Value};

impl<V, E> Expected<V, E> {
    pub fn new(value: impl Into<V>) -> Self { Value(value.into()) }
    pub fn in_place(value: V) -> Self { Value(value) }
    pub fn in_place_with(f: impl FnOnce() -> V) -> Self { Value(f()) }
    pub fn unexpect(error: E) -> Self { Error(error) }
    pub fn unexpect_with(f: impl FnOnce() -> E) -> Self { Error(f()) }

    pub fn has_value(&self) -> bool { matches!(self, Value(_)) }

    /// The value, or the error wrapped in [`BadExpectedAccess`].
    pub fn value(&self) -> Result<&V, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match self {
            Value(v) => Ok(v),
            Error(e) => Err(Self::bad_access(e)),
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut V, BadExpectedAccess<E>>
    where
        E: Clone,
    {
        match self {
            Value(v) => Ok(v),
            Error(e) => Err(Self::bad_access(e)),
        }
    }

    pub fn into_value(self) -> Result<V, BadExpectedAccess<E>> {
        match self {
            Value(v) => Ok(v),
            Error(e) => {
                log::debug!("into_value() on an error-holding expected");
                Err(BadExpectedAccess::new(e))
            }
        }
    }

    fn bad_access(e: &E) -> BadExpectedAccess<E>
    where
        E: Clone,
    {
        log::debug!("value() on an error-holding expected");
        BadExpectedAccess::new(e.clone())
    }

    /// The error.
    ///
    /// # Panics
    /// Panics if `self` holds a value.
    pub fn error(&self) -> &E {
        match self {
            Error(e) => e,
            Value(_) => panic!("error() on a value-holding expected"),
        }
    }

    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Error(e) => e,
            Value(_) => panic!("error_mut() on a value-holding expected"),
        }
    }

    pub fn value_or(self, fallback: V) -> V {
        match self {
            Value(v) => v,
            Error(_) => fallback,
        }
    }

    pub fn value_or_else(self, f: impl FnOnce(E) -> V) -> V {
        match self {
            Value(v) => v,
            Error(e) => f(e),
        }
    }

    /// Replaces the current payload with a value.
    ///
    /// The new value is built before the old payload is dropped, so a
    /// panicking conversion leaves `self` untouched.
    pub fn emplace(&mut self, value: impl Into<V>) -> &mut V {
        self.emplace_with(|| value.into())
    }

    pub fn emplace_with(&mut self, f: impl FnOnce() -> V) -> &mut V {
        *self = Value(f());
        match self {
            Value(v) => v,
            Error(_) => unreachable!(),
        }
    }

    pub fn assign_error(&mut self, error: impl Into<E>) -> &mut E {
        self.assign_error_with(|| error.into())
    }

    pub fn assign_error_with(&mut self, f: impl FnOnce() -> E) -> &mut E {
        *self = Error(f());
        match self {
            Error(e) => e,
            Value(_) => unreachable!(),
        }
    }

    pub fn swap(&mut self, other: &mut Self) { std::mem::swap(self, other) }

    pub fn as_ref(&self) -> Expected<&V, &E> {
        match self {
            Value(v) => Value(v),
            Error(e) => Error(e),
        }
    }

    pub fn as_mut(&mut self) -> Expected<&mut V, &mut E> {
        match self {
            Value(v) => Value(v),
            Error(e) => Error(e),
        }
    }

    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Expected<W, E> {
        match self {
            Value(v) => Value(f(v)),
            Error(e) => Error(e),
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Expected<V, F> {
        match self {
            Value(v) => Value(v),
            Error(e) => Error(f(e)),
        }
    }

    pub fn and_then<W>(
        self,
        f: impl FnOnce(V) -> Expected<W, E>,
    ) -> Expected<W, E> {
        match self {
            Value(v) => f(v),
            Error(e) => Error(e),
        }
    }

    pub fn or_else<F>(
        self,
        f: impl FnOnce(E) -> Expected<V, F>,
    ) -> Expected<V, F> {
        match self {
            Value(v) => Value(v),
            Error(e) => f(e),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        match self {
            Value(v) => Ok(v),
            Error(e) => Err(e),
        }
    }

    pub fn ok(self) -> Option<V> { self.into_result().ok() }
    pub fn err(self) -> Option<E> { self.into_result().err() }

    /// Whether `self` holds a value equal to `x`.
    pub fn contains<U>(&self, x: &U) -> bool
    where
        V: PartialEq<U>,
    {
        matches!(self, Value(v) if v == x)
    }
}

/// Unit-valued results only record success or an error.
///
/// [`Deref`] is still implemented here; it yields `()` and panics on an
/// error like it does for any other value type.
impl<E> Expected<(), E> {
    pub fn success() -> Self { Value(()) }
    pub fn emplace_unit(&mut self) { *self = Value(()) }
}

impl<V: Default, E> Default for Expected<V, E> {
    fn default() -> Self { Value(V::default()) }
}

/// # Panics
/// Dereferencing panics if `self` holds an error.
impl<V, E> Deref for Expected<V, E> {
    type Target = V;
    fn deref(&self) -> &V {
        match self {
            Value(v) => v,
            Error(_) => panic!("dereferenced an error-holding expected"),
        }
    }
}

impl<V, E> DerefMut for Expected<V, E> {
    fn deref_mut(&mut self) -> &mut V {
        match self {
            Value(v) => v,
            Error(_) => panic!("dereferenced an error-holding expected"),
        }
    }
}

impl<V, E> From<(InPlace, V)> for Expected<V, E> {
    fn from((_, value): (InPlace, V)) -> Self { Value(value) }
}

impl<V, E> From<(Unexpect, E)> for Expected<V, E> {
    fn from((_, error): (Unexpect, E)) -> Self { Error(error) }
}

impl<V, E, G: Into<E>> From<Unexpected<G>> for Expected<V, E> {
    fn from(u: Unexpected<G>) -> Self { Error(u.0.into()) }
}

impl<V, E> From<Result<V, E>> for Expected<V, E> {
    fn from(res: Result<V, E>) -> Self {
        match res {
            Ok(v) => Value(v),
            Err(e) => Error(e),
        }
    }
}

impl<V, E> From<Expected<V, E>> for Result<V, E> {
    fn from(x: Expected<V, E>) -> Self { x.into_result() }
}

impl<V, E, V2, E2> PartialEq<Expected<V2, E2>> for Expected<V, E>
where
    V: PartialEq<V2>,
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Expected<V2, E2>) -> bool {
        match (self, other) {
            (Value(x), Value(y)) => x == y,
            (Error(x), Error(y)) => x == y,
            _ => false,
        }
    }
}

impl<V: Eq, E: Eq> Eq for Expected<V, E> {}

impl<V, E, E2> PartialEq<Unexpected<E2>> for Expected<V, E>
where
    E: PartialEq<E2>,
{
    fn eq(&self, other: &Unexpected<E2>) -> bool {
        matches!(self, Error(e) if *e == other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Ex = Expected<i32, String>;

    #[test]
    fn sanity_check() {
        let x = Ex::unexpect("err".to_owned());
        assert_eq!(x.value_or(42), 42);
        let x = Ex::in_place(7);
        assert_eq!(x.value_or(42), 7);
    }

    #[test]
    fn round_trip() {
        for v in [-3, 0, 7] {
            assert_eq!(Ex::in_place(v).value(), Ok(&v));
            assert_eq!(Ex::from((InPlace, v)).into_value(), Ok(v));
        }
        for e in ["", "err", "other"] {
            let x = Ex::unexpect(e.to_owned());
            assert!(!x.has_value());
            assert_eq!(x.error(), e);
            let bad = x.value().unwrap_err();
            assert_eq!(bad.error(), e);
            assert_eq!(bad.into_error(), e);
            assert_eq!(Ex::from((Unexpect, e.to_owned())), Unexpected::new(e));
        }
    }

    #[test]
    fn construction() {
        let x: Expected<i64, String> = Expected::new(3_i32);
        assert_eq!(*x, 3);
        let x: Expected<Vec<i32>, String> = Expected::default();
        assert!(x.contains(&Vec::<i32>::new()));
        let x = Ex::in_place_with(|| 5);
        assert!(x.contains(&5));
        let x = Ex::unexpect_with(|| "lazy".to_owned());
        assert_eq!(x.error(), "lazy");

        let x: Expected<i32, String> = Unexpected::new("str").into();
        assert_eq!(x, Unexpected::new("str"));
        let x: Ex = Err("e".to_owned()).into();
        assert_eq!(x.err().as_deref(), Some("e"));
        let x: Ex = Ok(1).into();
        let r: Result<i32, String> = x.into();
        assert_eq!(r, Ok(1));
    }

    #[test]
    fn emplace_and_assign() {
        let mut x = Ex::unexpect("err".to_owned());
        *x.emplace(1) += 1;
        assert!(x.has_value());
        assert_eq!(*x, 2);

        x.assign_error("later");
        assert_eq!(x, Unexpected::new("later"));
        x.assign_error_with(String::new).push('!');
        assert_eq!(x.error(), "!");

        *x.emplace_with(|| 10) *= 3;
        assert_eq!(x.into_value(), Ok(30));
    }

    #[test]
    fn emplace_keeps_state_when_builder_panics() {
        let mut x = Ex::unexpect("kept".to_owned());
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            x.emplace_with(|| panic!("builder"));
        }));
        assert!(res.is_err());
        assert_eq!(x.error(), "kept");
    }

    #[test]
    fn swapping() {
        let mut a = Ex::in_place(1);
        let mut b = Ex::unexpect("b".to_owned());
        a.swap(&mut b);
        assert_eq!(a, Unexpected::new("b"));
        assert!(b.contains(&1));

        let mut c = Ex::in_place(2);
        b.swap(&mut c);
        assert!(b.contains(&2) && c.contains(&1));
        let mut d = Ex::unexpect("d".to_owned());
        a.swap(&mut d);
        assert_eq!((a.error().as_str(), d.error().as_str()), ("d", "b"));
    }

    #[test]
    fn comparisons() {
        let v1 = Expected::<i32, &str>::in_place(1);
        let e1 = Expected::<i32, &str>::unexpect("x");
        assert_eq!(v1, Expected::<i64, &str>::in_place(1).map(|v| v as i32));
        assert_ne!(v1, Expected::<i32, &str>::in_place(2));
        assert_ne!(v1, e1);
        assert_ne!(v1, Unexpected::new("x"));
        assert_eq!(e1, Unexpected::new("x"));
        assert_eq!(Unexpected::new(3), Unexpected::new(3));
        assert!(!e1.contains(&1));
    }

    #[test]
    fn combinators() {
        let x = Ex::in_place(4);
        assert_eq!(x.clone().map(|v| v * 2).ok(), Some(8));
        let halve = |v: i32| {
            if v % 2 == 0 {
                Ex::in_place(v / 2)
            } else {
                Ex::unexpect(format!("{v} is odd"))
            }
        };
        let y = x.and_then(halve).and_then(halve).and_then(halve);
        assert_eq!(y.error(), "1 is odd");
        let z = y.map_error(|e| e.len()).or_else(|n| {
            Expected::<i32, ()>::in_place(n as i32)
        });
        assert_eq!(z.into_result(), Ok(8));

        let mut w = Ex::in_place(1);
        if let Value(v) = w.as_mut() {
            *v = 9;
        }
        assert_eq!(w.as_ref().ok(), Some(&9));
        assert_eq!(w.value_mut().map(|v| *v), Ok(9));
        let e = Ex::unexpect("e".to_owned());
        assert_eq!(e.value_or_else(|e| e.len() as i32), 1);
    }

    #[test]
    fn unit_value() {
        let mut x: Expected<(), u8> = Expected::unexpect(3);
        assert!(!x.has_value());
        x.emplace_unit();
        assert_eq!(x, Expected::<(), u8>::success());
        assert_eq!(x.value(), Ok(&()));
        x.assign_error(5_u8);
        assert_eq!(x.value().unwrap_err().into_error(), 5);
    }

    #[test]
    #[should_panic]
    fn deref_error() {
        let x = Ex::unexpect("e".to_owned());
        let _ = *x;
    }

    #[test]
    fn unit_deref() {
        let x = Expected::<(), u8>::success();
        let () = *x;
    }

    #[test]
    #[should_panic]
    fn unit_deref_error() {
        let x: Expected<(), u8> = Expected::unexpect(1);
        let () = *x;
    }

    #[test]
    #[should_panic]
    fn error_of_value() {
        let x = Ex::in_place(1);
        let _ = x.error();
    }
}
