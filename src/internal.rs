/// Computes `a * b + c`, fused when the `fma` feature is on.
macro_rules! mul_add {
    ($a:expr, $b:expr, $c:expr) => {
        if cfg!(feature = "fma") {
            f64::mul_add($a, $b, $c)
        } else {
            $a * $b + $c
        }
    };
}

pub(crate) use mul_add;

/// Evaluates `c[0] + c[1] x + c[2] x² + ...` by Horner's rule.
#[inline]
pub(crate) fn horner(x: f64, c: &[f64]) -> f64 {
    c.iter().rev().fold(0.0, |acc, &v| mul_add!(acc, x, v))
}
