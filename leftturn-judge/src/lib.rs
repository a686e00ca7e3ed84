pub mod config;
pub mod geometry;
pub mod oracle;

pub use config::{CanvasGeometry, Intersection, JudgeConfig};
pub use geometry::{
    Aabb, CROSSWALK_HEIGHT, CROSSWALK_WIDTH, aabb_intersects, crosswalk_rect, crosswalk_rect_sized,
    left_turn_corridor,
};
pub use oracle::{
    Oracle, ScoredResponse, is_pedestrian_blocking, judge, judge_scene, score_response,
};
