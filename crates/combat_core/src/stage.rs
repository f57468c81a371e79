//! Static stage colliders and tagged segment queries.
//!
//! The arena floor and boundary walls are axis-aligned boxes tagged by what
//! they mean to the fighters; queries return the nearest entry point among
//! colliders matching the requested tag. A miss is a normal outcome.

use glam::Vec2;

use crate::geom::{self, RayHit};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColliderTag {
    Ground,
    Wall,
}

#[derive(Copy, Clone, Debug)]
pub struct Collider {
    pub tag: ColliderTag,
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct Stage {
    colliders: Vec<Collider>,
}

impl Stage {
    pub fn new(colliders: Vec<Collider>) -> Self {
        Self { colliders }
    }

    /// Flat rooftop: one ground slab across the playfield and a wall at each
    /// horizontal bound.
    pub fn rooftop(min_x: f32, max_x: f32) -> Self {
        let wall_height = 10.0;
        Self::new(vec![
            Collider {
                tag: ColliderTag::Ground,
                min: Vec2::new(min_x - 1.0, -1.0),
                max: Vec2::new(max_x + 1.0, 0.0),
            },
            Collider {
                tag: ColliderTag::Wall,
                min: Vec2::new(min_x - 1.0, 0.0),
                max: Vec2::new(min_x, wall_height),
            },
            Collider {
                tag: ColliderTag::Wall,
                min: Vec2::new(max_x, 0.0),
                max: Vec2::new(max_x + 1.0, wall_height),
            },
        ])
    }

    /// Cast a segment of `len` from `origin` along `dir` against colliders of
    /// `tag`; returns the nearest entry.
    pub fn cast(&self, origin: Vec2, dir: Vec2, len: f32, tag: ColliderTag) -> Option<RayHit> {
        let end = origin + dir * len;
        let mut best: Option<RayHit> = None;
        for c in &self.colliders {
            if c.tag != tag {
                continue;
            }
            if let Some(hit) = geom::segment_aabb_hit(origin, end, c.min, c.max) {
                if best.map(|b| hit.t < b.t).unwrap_or(true) {
                    best = Some(hit);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_cast_snaps_to_slab_top() {
        let stage = Stage::rooftop(-8.0, 8.0);
        let hit = stage
            .cast(Vec2::new(0.0, 0.2), Vec2::new(0.0, -1.0), 0.21, ColliderTag::Ground)
            .expect("standing on the slab");
        assert!((hit.point.y - 0.0).abs() < 1e-6);
    }

    #[test]
    fn ground_cast_misses_when_airborne() {
        let stage = Stage::rooftop(-8.0, 8.0);
        assert!(stage
            .cast(Vec2::new(0.0, 2.0), Vec2::new(0.0, -1.0), 0.21, ColliderTag::Ground)
            .is_none());
    }

    #[test]
    fn wall_cast_respects_tag() {
        let stage = Stage::rooftop(-8.0, 8.0);
        // Near the right wall, facing right.
        let origin = Vec2::new(7.9, 1.0);
        assert!(stage
            .cast(origin, Vec2::new(1.0, 0.0), 0.3, ColliderTag::Wall)
            .is_some());
        // The same segment must not report ground.
        assert!(stage
            .cast(origin, Vec2::new(1.0, 0.0), 0.3, ColliderTag::Ground)
            .is_none());
    }
}
