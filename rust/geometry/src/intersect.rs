//! Segment intersector (component B): decides whether two coplanar 3D
//! segments intersect, returning the intersection point.

use crate::vector::Vec3;

fn is_point(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    a.equal(b, epsilon)
}

/// Returns `Some(point)` if segments `[a,b]` and `[c,d]` share at least one
/// point, else `None`. Collinear overlap is reported as no crossing.
///
/// Preserves the reference source's degenerate-endpoint arithmetic exactly,
/// including the suspected bug described in [`intersect_segments_corrected`]:
/// do not "fix" this function.
pub fn intersect_segments(a: Vec3, b: Vec3, c: Vec3, d: Vec3, epsilon: f32) -> Option<Vec3> {
    let ab_is_point = is_point(a, b, epsilon);
    let cd_is_point = is_point(c, d, epsilon);

    if ab_is_point && cd_is_point {
        return None;
    }

    if ab_is_point {
        // vertical == 1 in the reference source: [a,b] is the degenerate point.
        let tx = (a.x - c.x) / (d.x - c.x);
        let ty = (a.y - c.y) / (d.y - c.y);
        return degenerate_crossing(tx, ty, epsilon).map(|t_avg| Vec3::lerp(c, d, t_avg));
    }

    if cd_is_point {
        // vertical == 2 in the reference source: [c,d] is the degenerate point.
        let tx = (c.x - a.x) / (b.x - a.x);
        let ty = (c.y - a.y) / (b.x - a.y); // preserved as-is, see module docs
        return degenerate_crossing(tx, ty, epsilon).map(|t_avg| Vec3::lerp(a, b, t_avg));
    }

    general_case(a, b, c, d, epsilon)
}

/// The evidently-intended reading of the `vertical == 2` branch, with
/// `ty`'s denominator corrected to `b.y - a.y`. Exists only so tests can
/// assert it disagrees with [`intersect_segments`] on a constructed input;
/// the splitter never calls this function.
pub fn intersect_segments_corrected(a: Vec3, b: Vec3, c: Vec3, d: Vec3, epsilon: f32) -> Option<Vec3> {
    let ab_is_point = is_point(a, b, epsilon);
    let cd_is_point = is_point(c, d, epsilon);

    if ab_is_point && cd_is_point {
        return None;
    }
    if ab_is_point {
        let tx = (a.x - c.x) / (d.x - c.x);
        let ty = (a.y - c.y) / (d.y - c.y);
        return degenerate_crossing(tx, ty, epsilon).map(|t_avg| Vec3::lerp(c, d, t_avg));
    }
    if cd_is_point {
        let tx = (c.x - a.x) / (b.x - a.x);
        let ty = (c.y - a.y) / (b.y - a.y); // corrected denominator
        return degenerate_crossing(tx, ty, epsilon).map(|t_avg| Vec3::lerp(a, b, t_avg));
    }
    general_case(a, b, c, d, epsilon)
}

fn degenerate_crossing(tx: f32, ty: f32, epsilon: f32) -> Option<f32> {
    if !(0.0..=1.0).contains(&tx) || !(0.0..=1.0).contains(&ty) {
        return None;
    }
    if (tx - ty).abs() < epsilon {
        Some((tx + ty) * 0.5)
    } else {
        None
    }
}

fn general_case(a: Vec3, b: Vec3, c: Vec3, d: Vec3, epsilon: f32) -> Option<Vec3> {
    let denom = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denom.abs() < epsilon {
        return None;
    }
    let t = ((a.x - c.x) * (c.y - d.y) - (a.y - c.y) * (c.x - d.x)) / denom;
    let u = -((a.x - b.x) * (a.y - c.y) - (a.y - b.y) * (a.x - c.x)) / denom;
    if !(0.0..=1.0).contains(&t) || !(0.0..=1.0).contains(&u) {
        return None;
    }
    let v1 = Vec3::lerp(a, b, t);
    let v2 = Vec3::lerp(c, d, u);
    if (v1.z - v2.z).abs() < epsilon {
        Some(v1.add(v2).scale(0.5))
    } else {
        None
    }
}
