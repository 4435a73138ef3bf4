use crate::core::scalar::{self, Real};

// === Degree domain ===

#[inline]
pub fn sind<T: Real>(x: T) -> T {
    scalar::deg_to_rad(x).sin()
}

#[inline]
pub fn cosd<T: Real>(x: T) -> T {
    scalar::deg_to_rad(x).cos()
}

/// Undefined at ±90°
#[inline]
pub fn tand<T: Real>(x: T) -> T {
    scalar::deg_to_rad(x).tan()
}

/// Undefined at 0° and ±180°
#[inline]
pub fn cscd<T: Real>(x: T) -> T {
    csc(scalar::deg_to_rad(x))
}

/// Undefined at ±90°
#[inline]
pub fn secd<T: Real>(x: T) -> T {
    sec(scalar::deg_to_rad(x))
}

/// Undefined at 0° and ±180°
#[inline]
pub fn cotd<T: Real>(x: T) -> T {
    cot(scalar::deg_to_rad(x))
}

/// Input in [-1, 1], result in [-90°, 90°]
#[inline]
pub fn asind<T: Real>(x: T) -> T {
    scalar::rad_to_deg(x.asin())
}

/// Input in [-1, 1], result in [0°, 180°]
#[inline]
pub fn acosd<T: Real>(x: T) -> T {
    scalar::rad_to_deg(x.acos())
}

#[inline]
pub fn atand<T: Real>(x: T) -> T {
    scalar::rad_to_deg(x.atan())
}

/// Input in (-∞, -1] ∪ [1, ∞)
#[inline]
pub fn acscd<T: Real>(x: T) -> T {
    scalar::rad_to_deg(acsc(x))
}

/// Input in (-∞, -1] ∪ [1, ∞)
#[inline]
pub fn asecd<T: Real>(x: T) -> T {
    scalar::rad_to_deg(asec(x))
}

#[inline]
pub fn acotd<T: Real>(x: T) -> T {
    scalar::rad_to_deg(acot(x))
}

/// Angle of the point (x, y) in degrees, in [-180°, 180°]
#[inline]
pub fn atan2d<T: Real>(y: T, x: T) -> T {
    scalar::rad_to_deg(y.atan2(x))
}

// === Radian domain ===

#[inline]
pub fn csc<T: Real>(x: T) -> T {
    x.sin().recip()
}

#[inline]
pub fn sec<T: Real>(x: T) -> T {
    x.cos().recip()
}

#[inline]
pub fn cot<T: Real>(x: T) -> T {
    x.cos() / x.sin()
}

#[inline]
pub fn acsc<T: Real>(x: T) -> T {
    x.recip().asin()
}

#[inline]
pub fn asec<T: Real>(x: T) -> T {
    x.recip().acos()
}

/// Result in [-π/2, π/2]; `acot(0)` is π/2
#[inline]
pub fn acot<T: Real>(x: T) -> T {
    x.recip().atan()
}

// === Validation ===

/// Reduces an angle in degrees into [-360, 360] by remainder, keeping its sign
#[inline]
pub fn valid_deg<T: Real>(x: T) -> T {
    x % T::lit(360.0)
}

/// Reduces an angle in radians into [-2π, 2π] by remainder, keeping its sign
#[inline]
pub fn valid_rad<T: Real>(x: T) -> T {
    x % (T::two() * T::PI())
}

/// Clamps an inverse sine/cosine input into [-1, 1]
#[inline]
pub fn valid_unit<T: Real>(x: T) -> T {
    scalar::clamp(x, -T::one(), T::one())
}

/// Pushes an inverse cosecant/secant input out to magnitude at least 1; zero maps to 1
#[inline]
pub fn valid_reciprocal_unit<T: Real>(x: T) -> T {
    if x.abs() >= T::one() {
        x
    } else if x < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}
