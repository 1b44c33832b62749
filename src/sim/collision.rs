//! Boundary contact test between two circles
//!
//! Radii move in discrete steps, so exact tangency almost never happens on a
//! frame boundary. Contact is reported when the boundaries are within a
//! tolerance band of each other instead.

use glam::DVec2;

use crate::distance;

/// How two circle boundaries touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// `b` contains `a`; `a`'s outer edge meets `b`'s boundary from inside
    InsideB,
    /// `a` contains `b`
    InsideA,
    /// The outer boundaries touch
    External,
}

/// Classify boundary contact between circle `a` and circle `b`.
///
/// Checked in order: `b` encompasses `a`, `a` encompasses `b`, external
/// adjacency. Returns `None` when the boundaries are further apart than
/// `tolerance`.
pub fn contact(
    a_center: DVec2,
    a_radius: f64,
    b_center: DVec2,
    b_radius: f64,
    tolerance: f64,
) -> Option<Contact> {
    let d = distance(a_center, b_center);

    //   b---------a+radius==]--]
    if b_radius >= d && (b_radius - (d + a_radius)).abs() < tolerance {
        return Some(Contact::InsideB);
    }

    //   a---------b+radius==]--]
    if a_radius >= d && (a_radius - (d + b_radius)).abs() < tolerance {
        return Some(Contact::InsideA);
    }

    if ((a_radius + b_radius) - d).abs() < tolerance {
        return Some(Contact::External);
    }

    None
}

/// Symmetric boundary contact predicate
#[inline]
pub fn collides(
    a_center: DVec2,
    a_radius: f64,
    b_center: DVec2,
    b_radius: f64,
    tolerance: f64,
) -> bool {
    contact(a_center, a_radius, b_center, b_radius, tolerance).is_some()
}
