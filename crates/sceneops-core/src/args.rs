//! Typed argument shapes
//!
//! Raw step arguments are untyped [`Value`]s. Conversion turns the ones a
//! capability understands into [`Arg`] variants collected in [`TypedArgs`].

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// 3D point or vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Identity scale
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create from components
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create from an `[x, y, z]` array
    #[inline]
    #[must_use]
    pub const fn from_array(components: [f64; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }

    /// Components as an array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise sum
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise product
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Euler-angle triple in radians (X, Y, Z order)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Euler {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Euler {
    /// Create from an `[x, y, z]` array of radians
    #[inline]
    #[must_use]
    pub const fn from_array(components: [f64; 3]) -> Self {
        Self {
            roll: components[0],
            pitch: components[1],
            yaw: components[2],
        }
    }

    /// Components as an array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }

    /// Add `angle` radians about a single axis
    #[must_use]
    pub fn rotated(self, axis: Axis, angle: f64) -> Self {
        let mut components = self.to_array();
        components[axis.index()] += angle;
        Self::from_array(components)
    }
}

/// Principal axis label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis for component index 0, 1 or 2
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// Component index of this axis
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Label as the host expects it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// Parse a label, case-insensitive
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "X" | "x" => Some(Self::X),
            "Y" | "y" => Some(Self::Y),
            "Z" | "z" => Some(Self::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted argument value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Arg {
    /// 3D point (`location`)
    Point(Vec3),
    /// Euler triple (`rotation`)
    Euler(Euler),
    /// 3D vector (`value` on translate/resize)
    Vector(Vec3),
    /// Scalar angle in radians (`value` on rotate)
    Angle(f64),
    /// Axis label (`orient_axis` derived from a rotation collapse)
    Axis(Axis),
    /// Passed through unchanged
    Raw(Value),
}

impl Arg {
    /// Vector view of point/vector arguments, or a raw 3-element numeric array
    #[must_use]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Self::Point(v) | Self::Vector(v) => Some(*v),
            Self::Raw(value) => numeric_triple(value).map(Vec3::from_array),
            _ => None,
        }
    }

    /// Euler view of rotation arguments
    #[must_use]
    pub fn as_euler(&self) -> Option<Euler> {
        match self {
            Self::Euler(e) => Some(*e),
            Self::Raw(value) => numeric_triple(value).map(Euler::from_array),
            _ => None,
        }
    }

    /// Scalar view of angle or raw numeric arguments
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Angle(angle) => Some(*angle),
            Self::Raw(value) => value.as_f64(),
            _ => None,
        }
    }

    /// Axis view of axis labels, including raw strings such as `"X"`
    #[must_use]
    pub fn as_axis(&self) -> Option<Axis> {
        match self {
            Self::Axis(axis) => Some(*axis),
            Self::Raw(Value::String(label)) => Axis::parse(label),
            _ => None,
        }
    }

    /// String view of raw string arguments
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Raw(value) => value.as_str(),
            _ => None,
        }
    }

    /// Boolean view of raw boolean arguments
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Raw(value) => value.as_bool(),
            _ => None,
        }
    }
}

/// Insertion-ordered set of converted keyword arguments
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TypedArgs {
    entries: IndexMap<String, Arg>,
}

impl TypedArgs {
    /// Create empty argument set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an argument; replacing keeps its position
    pub fn insert(&mut self, key: impl Into<String>, arg: Arg) -> Option<Arg> {
        self.entries.insert(key.into(), arg)
    }

    /// Get argument by name
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.entries.get(key)
    }

    /// Check whether an argument is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of arguments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the capability will be invoked without arguments
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(name, arg)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Arg)> for TypedArgs {
    fn from_iter<I: IntoIterator<Item = (String, Arg)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a 3-element sequence whose members are all numbers.
#[must_use]
pub fn numeric_triple(value: &Value) -> Option<[f64; 3]> {
    match value.as_array()?.as_slice() {
        [x, y, z] => Some([x.as_f64()?, y.as_f64()?, z.as_f64()?]),
        _ => None,
    }
}
