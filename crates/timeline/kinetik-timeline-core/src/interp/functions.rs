//! Interpolation helpers:
//! - lerp_f32 / lerp_f64 (`a*(1-t) + b*t`, exact at both ends)
//! - integer blends computed in f64, truncated toward zero, saturating
//! - point blends with independent x/y, rounded to nearest
//! - interpolate (dispatch on the runtime kind of the stored values)

use crate::error::InterpError;
use crate::value::{Point, PointF, Value};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

// `as` from f64 truncates toward zero and saturates at the integer bounds.
#[inline]
fn lerp_i32(a: i32, b: i32, t: f64) -> i32 {
    lerp_f64(f64::from(a), f64::from(b), t) as i32
}

#[inline]
fn lerp_u32(a: u32, b: u32, t: f64) -> u32 {
    lerp_f64(f64::from(a), f64::from(b), t) as u32
}

#[inline]
fn lerp_i64(a: i64, b: i64, t: f64) -> i64 {
    lerp_f64(a as f64, b as f64, t) as i64
}

#[inline]
fn lerp_u64(a: u64, b: u64, t: f64) -> u64 {
    lerp_f64(a as f64, b as f64, t) as u64
}

/// Point components round to the nearest pixel.
#[inline]
pub fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    let blend = |a: i32, b: i32| lerp_f64(f64::from(a), f64::from(b), t).round() as i32;
    Point {
        x: blend(a.x, b.x),
        y: blend(a.y, b.y),
    }
}

#[inline]
pub fn lerp_point_f(a: PointF, b: PointF, t: f64) -> PointF {
    PointF {
        x: lerp_f64(a.x, b.x, t),
        y: lerp_f64(a.y, b.y, t),
    }
}

/// Blend `from` towards `to` at eased progress `t`.
///
/// Both values must share an interpolable kind; anything else is reported as
/// an [`InterpError`] so the caller can fall back to stepping.
pub fn interpolate(from: &Value, to: &Value, t: f32) -> Result<Value, InterpError> {
    let td = f64::from(t);
    match (from, to) {
        (Value::I32(a), Value::I32(b)) => Ok(Value::I32(lerp_i32(*a, *b, td))),
        (Value::U32(a), Value::U32(b)) => Ok(Value::U32(lerp_u32(*a, *b, td))),
        (Value::I64(a), Value::I64(b)) => Ok(Value::I64(lerp_i64(*a, *b, td))),
        (Value::U64(a), Value::U64(b)) => Ok(Value::U64(lerp_u64(*a, *b, td))),
        (Value::F32(a), Value::F32(b)) => Ok(Value::F32(lerp_f32(*a, *b, t))),
        (Value::F64(a), Value::F64(b)) => Ok(Value::F64(lerp_f64(*a, *b, td))),
        (Value::Point(a), Value::Point(b)) => Ok(Value::Point(lerp_point(*a, *b, td))),
        (Value::PointF(a), Value::PointF(b)) => Ok(Value::PointF(lerp_point_f(*a, *b, td))),
        (a, b) if a.kind() != b.kind() => Err(InterpError::KindMismatch {
            from: a.kind(),
            to: b.kind(),
        }),
        (a, _) => Err(InterpError::Unsupported(a.kind())),
    }
}
