//! Degree- and radian-domain trigonometry.
//!
//! Out-of-domain inputs (e.g. `tand(90)`, `cscd(0)`, `asind(2)`) follow IEEE
//! semantics and are the caller's responsibility; the `valid_*` helpers map
//! inputs into range beforehand when needed.

mod basic;
mod taylor;
mod table;
mod discrete;

pub use basic::{
    acot, acotd, acosd, acsc, acscd, asec, asecd, asind, atan2d, atand, cosd, cot, cotd, csc, cscd,
    sec, secd, sind, tand, valid_deg, valid_rad, valid_reciprocal_unit, valid_unit,
};
pub use taylor::{cos_taylor, cosd_taylor, sin_taylor, sind_taylor, tan_taylor, tand_taylor};
pub use table::TrigTable;
pub use discrete::{edge_to_point_ratio, face_to_point_ratio, point_to_edge_ratio, point_to_face_ratio};
