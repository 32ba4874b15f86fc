//! Integer helpers.

pub trait Gcd {
    fn gcd(self, other: Self) -> Self;
}

pub trait Lcm: Sized {
    fn lcm(self, other: Self) -> Self;
    /// `None` on overflow.
    fn checked_lcm(self, other: Self) -> Option<Self>;
}

macro_rules! impl_uint {
    ( $($ty:ty)* ) => { $(
        impl Gcd for $ty {
            // binary gcd: strip common twos, then subtract odd values
            fn gcd(self, other: Self) -> Self {
                if self == 0 || other == 0 {
                    return self | other;
                }
                let shift = (self | other).trailing_zeros();
                let mut a = self >> self.trailing_zeros();
                let mut b = other >> other.trailing_zeros();
                while a != b {
                    if a > b {
                        std::mem::swap(&mut a, &mut b);
                    }
                    b -= a;
                    b >>= b.trailing_zeros();
                }
                a << shift
            }
        }
        impl Lcm for $ty {
            fn lcm(self, other: Self) -> Self {
                if self == 0 || other == 0 {
                    return 0;
                }
                self / self.gcd(other) * other
            }
            fn checked_lcm(self, other: Self) -> Option<Self> {
                if self == 0 || other == 0 {
                    return Some(0);
                }
                (self / self.gcd(other)).checked_mul(other)
            }
        }
    )* }
}

impl_uint! { u8 u16 u32 u64 u128 usize }

/// `x` combined with itself `n` times under the associative `op`, with
/// O(log n) applications.
///
/// # Panics
/// If `n` is zero; there is no identity to return.
pub fn natural_power<T: Clone>(
    x: T,
    mut n: u64,
    mut op: impl FnMut(&T, &T) -> T,
) -> T {
    assert!(n > 0, "natural_power needs a positive exponent");
    let mut base = x;
    while n % 2 == 0 {
        base = op(&base, &base);
        n /= 2;
    }
    let mut res = base.clone();
    n /= 2;
    while n > 0 {
        base = op(&base, &base);
        if n % 2 == 1 {
            res = op(&res, &base);
        }
        n /= 2;
    }
    res
}

/// `n!`, or `None` if it does not fit in `u64`.
pub fn factorial(n: u64) -> Option<u64> {
    (1..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_check() {
        assert_eq!(24_u32.gcd(16), 8);
        assert_eq!(0_u32.gcd(0), 0);
        assert_eq!(4_u64.lcm(6), 12);
        assert_eq!(0_u64.lcm(6), 0);
        assert_eq!(200_u8.checked_lcm(3), None);
        assert_eq!(20_u8.checked_lcm(30), Some(60));
    }

    #[test]
    fn gcd_agrees_with_euclid() {
        fn euclid(mut a: u8, mut b: u8) -> u8 {
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a
        }
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(a.gcd(b), euclid(a, b), "a: {a}, b: {b}");
            }
        }
        assert_eq!((1_u128 << 100).gcd(3 << 98), 1 << 98);
        assert_eq!(u64::MAX.gcd(u64::MAX), u64::MAX);
    }

    #[test]
    fn powers() {
        for n in 1..70 {
            let p = natural_power(3_u128, n, |x, y| x * y);
            assert_eq!(p, 3_u128.pow(n as u32));
            let s = natural_power("ab".to_owned(), n, |x, y| format!("{x}{y}"));
            assert_eq!(s, "ab".repeat(n as usize));
        }
        // non-commutative: 2x2 matrix product, Fibonacci numbers
        let mul = |a: &[[u64; 2]; 2], b: &[[u64; 2]; 2]| {
            let mut c = [[0; 2]; 2];
            for i in 0..2 {
                for j in 0..2 {
                    for k in 0..2 {
                        c[i][j] += a[i][k] * b[k][j];
                    }
                }
            }
            c
        };
        assert_eq!(natural_power([[1, 1], [1, 0]], 10, mul)[0][1], 55);
    }

    #[test]
    #[should_panic]
    fn zeroth_power() { natural_power(2, 0, |x, y| x * y); }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2432902008176640000));
        assert_eq!(factorial(21), None);
    }
}
