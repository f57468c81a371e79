//! Small geometry helpers reusable by stage queries and hit casts.

use glam::Vec2;

/// Result of a segment query: parametric `t` along the segment and the
/// world-space point at which the segment first meets the volume.
#[derive(Copy, Clone, Debug)]
pub struct RayHit {
    pub t: f32,
    pub point: Vec2,
}

/// Compute the parametric `t` at which a segment `[p0, p1]` first enters an
/// axis-aligned box. Returns `None` when no intersection occurs. `t` is in
/// `[0, 1]`; a segment starting inside the box reports `t = 0`.
#[inline]
pub fn segment_aabb_enter_t(p0: Vec2, p1: Vec2, min: Vec2, max: Vec2) -> Option<f32> {
    let d = p1 - p0;
    let mut tmin = 0.0f32;
    let mut tmax = 1.0f32;
    for i in 0..2 {
        let s = p0[i];
        let dir = d[i];
        let minb = min[i];
        let maxb = max[i];
        if dir.abs() < 1e-6 {
            if s < minb || s > maxb {
                return None;
            }
        } else {
            let inv = 1.0 / dir;
            let mut t0 = (minb - s) * inv;
            let mut t1 = (maxb - s) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            tmin = tmin.max(t0);
            tmax = tmax.min(t1);
            if tmin > tmax {
                return None;
            }
        }
    }
    Some(tmin)
}

/// Nearest-entry variant returning the hit point as well.
#[inline]
pub fn segment_aabb_hit(p0: Vec2, p1: Vec2, min: Vec2, max: Vec2) -> Option<RayHit> {
    let t = segment_aabb_enter_t(p0, p1, min, max)?;
    Some(RayHit {
        t,
        point: p0 + (p1 - p0) * t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_enters_box() {
        let t = segment_aabb_enter_t(
            Vec2::new(-2.0, 0.5),
            Vec2::new(2.0, 0.5),
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 1.0),
        )
        .expect("hit");
        assert!((t - 0.25).abs() < 1e-6);
    }

    #[test]
    fn segment_misses_box() {
        assert!(segment_aabb_enter_t(
            Vec2::new(-2.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn start_inside_reports_zero() {
        let hit = segment_aabb_hit(
            Vec2::new(0.0, 0.5),
            Vec2::new(2.0, 0.5),
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 1.0),
        )
        .expect("hit");
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.point, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn vertical_drop_finds_ground_plane() {
        let hit = segment_aabb_hit(
            Vec2::new(0.3, 0.2),
            Vec2::new(0.3, -0.01),
            Vec2::new(-8.0, -1.0),
            Vec2::new(8.0, 0.0),
        )
        .expect("hit");
        assert!((hit.point.y - 0.0).abs() < 1e-6);
    }
}
