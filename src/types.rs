use nalgebra::{Point3, Vector3};

/// Scalar field value at a point in space.
pub type Value = f64;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// A scalar field: maps an `(x, y, z)` position to a [`Value`].
///
/// The field is assumed pure — no side effects, and the same output for the
/// same input. Extraction samples it concurrently, hence `Sync`. Points where
/// the field is **strictly below** the isovalue are considered "inside" the
/// surface; a value exactly equal to the isovalue counts as outside.
///
/// The lifetime parameter lets trait objects of this type borrow caller
/// state (a sampled grid, a counter) for the duration of one extraction
/// call; the field is never stored beyond that.
pub type ScalarField<'a> = dyn Fn(Value, Value, Value) -> Value + Sync + 'a;
