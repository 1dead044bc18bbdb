//! Pointer gestures in world space.

use bevy::prelude::*;

/// Three-phase drag. Each phase carries the world-space pointer ray.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum DragGesture {
    Began(Ray3d),
    Moved(Ray3d),
    Ended(Ray3d),
}

/// Whether `ray` passes within `radius` of `center` in front of its origin.
pub fn ray_hits_sphere(ray: Ray3d, center: Vec3, radius: f32) -> bool {
    let to_center = center - ray.origin;
    let t = to_center.dot(*ray.direction).max(0.0);
    let closest = ray.origin + *ray.direction * t;
    closest.distance_squared(center) <= radius * radius
}

/// Intersection of `ray` with a plane. `None` if parallel or behind the origin.
pub fn ray_plane_point(ray: Ray3d, plane_origin: Vec3, plane_normal: Vec3) -> Option<Vec3> {
    let denom = ray.direction.dot(plane_normal);
    if denom.abs() <= f32::EPSILON {
        return None;
    }
    let t = (plane_origin - ray.origin).dot(plane_normal) / denom;
    (t >= 0.0).then(|| ray.origin + *ray.direction * t)
}
