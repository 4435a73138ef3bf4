mod vector;
mod matrix;
mod euler;
mod affine;
mod projection;
mod quaternion;
mod transform;

pub use vector::{Vector2, Vector3, Vector4};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use euler::RotationOrder;
pub use projection::{StereoConversion, TransformBasis};
pub use quaternion::{Quaternion, Rotation};
pub use transform::Transform;

pub type Vec2f = Vector2<f32>;
pub type Vec3f = Vector3<f32>;
pub type Vec4f = Vector4<f32>;
pub type Mat2f = Matrix2<f32>;
pub type Mat3f = Matrix3<f32>;
pub type Mat4f = Matrix4<f32>;
pub type Quatf = Quaternion<f32>;

pub type Vec2d = Vector2<f64>;
pub type Vec3d = Vector3<f64>;
pub type Vec4d = Vector4<f64>;
pub type Mat2d = Matrix2<f64>;
pub type Mat3d = Matrix3<f64>;
pub type Mat4d = Matrix4<f64>;
pub type Quatd = Quaternion<f64>;
