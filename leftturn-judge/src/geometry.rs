//! Axis-aligned boxes for the intersection layout.
//!
//! Coordinates are scene-local with y growing downward, so "north" is the
//! smaller y.

use leftturn_core::Crosswalk;

/// Default crosswalk extent along the road.
pub const CROSSWALK_WIDTH: f64 = 60.0;
/// Default crosswalk depth across the road.
pub const CROSSWALK_HEIGHT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// True unless the boxes are separated on some axis. Shared edges count as
/// intersecting.
pub fn aabb_intersects(a: &Aabb, b: &Aabb) -> bool {
    !(a.right() < b.x || b.right() < a.x || a.bottom() < b.y || b.bottom() < a.y)
}

/// Crosswalk box with the default 60x12 extent.
pub fn crosswalk_rect(center_x: f64, center_y: f64, road_width: f64, side: Crosswalk) -> Aabb {
    crosswalk_rect_sized(
        center_x,
        center_y,
        road_width,
        side,
        CROSSWALK_WIDTH,
        CROSSWALK_HEIGHT,
    )
}

/// Crosswalk box centred horizontally on the intersection, straddling the
/// road edge `road_width / 2` above (north) or below (south) the centre.
pub fn crosswalk_rect_sized(
    center_x: f64,
    center_y: f64,
    road_width: f64,
    side: Crosswalk,
    crosswalk_w: f64,
    crosswalk_h: f64,
) -> Aabb {
    let half_road = road_width / 2.0;
    let edge_y = match side {
        Crosswalk::North => center_y - half_road,
        Crosswalk::South => center_y + half_road,
    };
    Aabb {
        x: center_x - crosswalk_w / 2.0,
        y: edge_y - crosswalk_h / 2.0,
        w: crosswalk_w,
        h: crosswalk_h,
    }
}

/// Region swept by a west-approach vehicle turning south: the south-west
/// quadrant of the intersection.
///
/// This is a coarse rectangle, not the turning arc. Ground truth for every
/// authored scene depends on this exact box; do not reshape it.
pub fn left_turn_corridor(center_x: f64, center_y: f64, road_width: f64) -> Aabb {
    let half_road = road_width / 2.0;
    Aabb {
        x: center_x - half_road,
        y: center_y,
        w: half_road,
        h: half_road,
    }
}
