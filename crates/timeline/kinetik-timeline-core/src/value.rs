//! Typed values stored in the variable vector.
//!
//! Numeric kinds and the two point kinds interpolate; `Bool` and `Text` are
//! step-only and make the engine jump straight to the target value.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ValueKind {
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Point,
    PointF,
    Bool,
    Text,
}

impl ValueKind {
    /// Whether `interpolate` has a blend for this kind.
    #[inline]
    pub fn is_interpolable(self) -> bool {
        !matches!(self, ValueKind::Bool | ValueKind::Text)
    }
}

/// Integer 2D point.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Floating point 2D point.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Point(Point),
    PointF(PointF),
    /// Step-only boolean value (no blending)
    Bool(bool),
    /// Step-only text value (no blending)
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::I32(_) => ValueKind::I32,
            Value::U32(_) => ValueKind::U32,
            Value::I64(_) => ValueKind::I64,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Point(_) => ValueKind::Point,
            Value::PointF(_) => ValueKind::PointF,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Convenience constructors
    pub fn point(x: i32, y: i32) -> Self {
        Value::Point(Point { x, y })
    }

    pub fn point_f(x: f64, y: f64) -> Self {
        Value::PointF(PointF { x, y })
    }

    /// Numeric view of scalar kinds, widened to f64. Points and step-only
    /// kinds return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::I32(v) => Some(f64::from(*v)),
            Value::U32(v) => Some(f64::from(*v)),
            Value::I64(v) => Some(*v as f64),
            Value::U64(v) => Some(*v as f64),
            Value::F32(v) => Some(f64::from(*v)),
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Point view of both point kinds.
    pub fn as_point_f(&self) -> Option<PointF> {
        match self {
            Value::Point(p) => Some(PointF {
                x: f64::from(p.x),
                y: f64::from(p.y),
            }),
            Value::PointF(p) => Some(*p),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::I32(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::U64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::F64(v)
    }
}

impl From<Point> for Value {
    fn from(v: Point) -> Self {
        Value::Point(v)
    }
}

impl From<PointF> for Value {
    fn from(v: PointF) -> Self {
        Value::PointF(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
