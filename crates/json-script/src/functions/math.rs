//! Numeric functions forwarded to the double-precision implementations, plus
//! `pow10` and `factorial`.

use crate::error::ScriptError;
use crate::node::Node;
use crate::types::FunctionDefinition;
use std::f64::consts::FRAC_2_SQRT_PI;
use std::sync::Arc;

fn forward(name: &'static str, f: fn(f64) -> f64) -> FunctionDefinition {
    FunctionDefinition {
        name,
        eval_fn: Arc::new(move |node: &Node| -> Result<Node, ScriptError> {
            Ok(Node::numeric(name, f(node.get_numeric()?)))
        }),
    }
}

/// Unbiased binary exponent, as `ilogb` but in float and with the IEEE
/// special cases for zero, infinities and NaN.
fn logb(x: f64) -> f64 {
    if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        libm::ilogb(x) as f64
    }
}

/// Inverse error function.
///
/// Starts from Giles' single-precision approximation and polishes it with two
/// Newton steps against `erf`.
fn erfinv(y: f64) -> f64 {
    if y.is_nan() || !(-1.0..=1.0).contains(&y) {
        return f64::NAN;
    }
    if y == 1.0 {
        return f64::INFINITY;
    }
    if y == -1.0 {
        return f64::NEG_INFINITY;
    }
    if y == 0.0 {
        return y;
    }

    let mut w = -((1.0 - y) * (1.0 + y)).ln();
    let p = if w < 5.0 {
        w -= 2.5;
        [
            3.43273939e-07,
            -3.5233877e-06,
            -4.39150654e-06,
            0.00021858087,
            -0.00125372503,
            -0.00417768164,
            0.246640727,
            1.50140941,
        ]
        .iter()
        .fold(2.81022636e-08, |p, c| c + p * w)
    } else {
        w = w.sqrt() - 3.0;
        [
            0.000100950558,
            0.00134934322,
            -0.00367342844,
            0.00573950773,
            -0.0076224613,
            0.00943887047,
            1.00167406,
            2.83297682,
        ]
        .iter()
        .fold(-0.000200214257, |p, c| c + p * w)
    };

    let mut x = p * y;
    for _ in 0..2 {
        let slope = FRAC_2_SQRT_PI * (-x * x).exp();
        if slope == 0.0 {
            break;
        }
        x -= (libm::erf(x) - y) / slope;
    }
    x
}

fn erfcinv(y: f64) -> f64 {
    erfinv(1.0 - y)
}

/// 10^n, correctly rounded.
///
/// Repeated multiplication drifts past 10^22, so the power is read back from
/// its decimal spelling instead.
fn pow10_eval(node: &Node) -> Result<Node, ScriptError> {
    let n = node.get_integer()?;
    let result = match n {
        n if n > 308 => f64::INFINITY,
        n if n < -323 => 0.0,
        n => format!("1e{}", n)
            .parse::<f64>()
            .map_err(|err| ScriptError::Domain(format!("pow10({}): {}", n, err)))?,
    };
    Ok(Node::numeric("pow10", result))
}

/// n! for a non-negative integer; anything past 20! does not fit in a `u64`
/// and is reported as an overflow.
fn factorial_eval(node: &Node) -> Result<Node, ScriptError> {
    let n = node.get_uinteger()?;
    let result = (2..=n)
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or_else(|| ScriptError::Overflow(format!("factorial({})", n)))?;
    Ok(Node::numeric("factorial", result as f64))
}

pub fn functions() -> Vec<FunctionDefinition> {
    vec![
        forward("abs", f64::abs),
        forward("acos", f64::acos),
        forward("acosh", f64::acosh),
        forward("asin", f64::asin),
        forward("asinh", f64::asinh),
        forward("atan", f64::atan),
        forward("atanh", f64::atanh),
        forward("cbrt", f64::cbrt),
        forward("ceil", f64::ceil),
        forward("cos", f64::cos),
        forward("cosh", f64::cosh),
        forward("erf", libm::erf),
        forward("erfc", libm::erfc),
        forward("erfcinv", erfcinv),
        forward("erfinv", erfinv),
        forward("exp", f64::exp),
        forward("exp2", f64::exp2),
        forward("expm1", f64::exp_m1),
        forward("floor", f64::floor),
        forward("gamma", libm::tgamma),
        forward("j0", libm::j0),
        forward("j1", libm::j1),
        forward("log", f64::ln),
        forward("log10", f64::log10),
        forward("log1p", f64::ln_1p),
        forward("log2", f64::log2),
        forward("logb", logb),
        forward("round", f64::round),
        forward("roundtoeven", f64::round_ties_even),
        forward("sin", f64::sin),
        forward("sinh", f64::sinh),
        forward("sqrt", f64::sqrt),
        forward("tan", f64::tan),
        forward("tanh", f64::tanh),
        forward("trunc", f64::trunc),
        forward("y0", libm::y0),
        forward("y1", libm::y1),
        FunctionDefinition::new("pow10", pow10_eval),
        FunctionDefinition::new("factorial", factorial_eval),
    ]
}
