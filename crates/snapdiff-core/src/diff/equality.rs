//! Value equality policy used by the differ.
//!
//! `serde_json::Value`'s own `PartialEq` distinguishes `1` from `1.0`.
//! Here numbers compare by numeric value and every other comparison is
//! type-strict: `true` is not `1` and `"1"` is not `1`.

use serde_json::{Number, Value};

/// Deep equality under the snapshot comparison policy
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    match (x.is_f64(), y.is_f64()) {
        (false, false) => match (x.as_i64(), y.as_i64()) {
            (Some(l), Some(r)) => l == r,
            _ => x.as_u64().is_some() && x.as_u64() == y.as_u64(),
        },
        (true, true) => x.as_f64() == y.as_f64(),
        (false, true) => y.as_f64().is_some_and(|f| integer_equals_float(x, f)),
        (true, false) => x.as_f64().is_some_and(|f| integer_equals_float(y, f)),
    }
}

/// Exact integer/float comparison; going through `f64` would round large
/// integers onto their float neighbours.
fn integer_equals_float(int: &Number, float: f64) -> bool {
    // 2^63 and 2^64, both exactly representable as f64
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    const U64_END: f64 = 18_446_744_073_709_551_616.0;

    if !float.is_finite() || float.fract() != 0.0 {
        return false;
    }
    if let Some(i) = int.as_i64() {
        return (-I64_END..I64_END).contains(&float) && float as i64 == i;
    }
    match int.as_u64() {
        Some(u) => (0.0..U64_END).contains(&float) && float as u64 == u,
        None => false,
    }
}
