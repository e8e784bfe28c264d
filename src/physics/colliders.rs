use glam::Vec3;

use super::{LayerMask, Ray, RayHit, RaycastQuery};

/// Collision geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid sphere.
    Sphere {
        /// World-space center.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Aabb {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

/// A shape tagged with a collision layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Geometry.
    pub shape: Shape,
    /// Layer index (0..=31).
    pub layer: u8,
}

impl Collider {
    /// Sphere collider on `layer`.
    #[must_use]
    pub fn sphere(center: Vec3, radius: f32, layer: u8) -> Self {
        Self {
            shape: Shape::Sphere { center, radius },
            layer,
        }
    }

    /// Box collider spanning the two corners (in any order) on `layer`.
    #[must_use]
    pub fn aabb(a: Vec3, b: Vec3, layer: u8) -> Self {
        Self {
            shape: Shape::Aabb {
                min: a.min(b),
                max: a.max(b),
            },
            layer,
        }
    }

    /// Entry distance along `ray`, if the ray meets this collider ahead of
    /// its origin.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self.shape {
            Shape::Sphere { center, radius } => {
                ray_sphere_intersect(ray, center, radius)
            }
            Shape::Aabb { min, max } => ray_aabb_intersect(ray, min, max),
        }
    }
}

/// Flat list of colliders queried by brute force.
#[derive(Debug, Clone, Default)]
pub struct ColliderSet {
    colliders: Vec<Collider>,
}

impl ColliderSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collider.
    pub fn insert(&mut self, collider: Collider) {
        self.colliders.push(collider);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, collider: Collider) -> Self {
        self.insert(collider);
        self
    }

    /// Number of colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the set holds no colliders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Remove every collider.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }
}

impl RaycastQuery for ColliderSet {
    fn cast_ray(
        &self,
        ray: Ray,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<f32> = None;
        for collider in &self.colliders {
            if !mask.contains(collider.layer) {
                continue;
            }
            if let Some(t) = collider.intersect(&ray) {
                if t <= max_distance && closest.is_none_or(|c| t < c) {
                    closest = Some(t);
                }
            }
        }

        closest.map(|distance| RayHit {
            distance,
            point: ray.at(distance),
        })
    }
}

/// Nearest non-negative intersection with a sphere. From inside the sphere
/// this is the exit point.
fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    // Unit direction, so the quadratic's `a` term is 1.
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - c;

    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + root;
    (far >= 0.0).then_some(far)
}

/// Slab test. A ray starting inside the box hits at distance 0.
fn ray_aabb_intersect(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        let (lo, hi) = (min[axis], max[axis]);

        if d.abs() < 1e-8 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let mut t1 = (lo - o) / d;
        let mut t2 = (hi - o) / d;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_enter = t_enter.max(t1);
        t_exit = t_exit.min(t2);
        if t_enter > t_exit {
            return None;
        }
    }

    Some(t_enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_behind_target() -> ColliderSet {
        ColliderSet::new()
            .with(Collider::aabb(
                Vec3::new(-5.0, -5.0, 3.0),
                Vec3::new(5.0, 5.0, 4.0),
                1,
            ))
            .with(Collider::sphere(Vec3::new(0.0, 0.0, 1.5), 0.5, 2))
    }

    #[test]
    fn nearest_hit_wins() {
        let set = wall_behind_target();
        let hit = set
            .cast_ray(Ray::new(Vec3::ZERO, Vec3::Z), 10.0, LayerMask::ALL)
            .unwrap();
        assert!((hit.distance - 1.0).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn mask_filters_layers() {
        let set = wall_behind_target();
        let hit = set
            .cast_ray(Ray::new(Vec3::ZERO, Vec3::Z), 10.0, LayerMask::layer(1))
            .unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert!(set
            .cast_ray(Ray::new(Vec3::ZERO, Vec3::Z), 10.0, LayerMask::NONE)
            .is_none());
    }

    #[test]
    fn hits_beyond_max_distance_are_ignored() {
        let set = wall_behind_target();
        assert!(set
            .cast_ray(Ray::new(Vec3::ZERO, Vec3::Z), 2.5, LayerMask::layer(1))
            .is_none());
    }

    #[test]
    fn shapes_behind_the_origin_do_not_hit() {
        let set = wall_behind_target();
        assert!(set
            .cast_ray(Ray::new(Vec3::ZERO, Vec3::NEG_Z), 10.0, LayerMask::ALL)
            .is_none());
    }

    #[test]
    fn origin_inside_shapes() {
        let sphere = Collider::sphere(Vec3::ZERO, 2.0, 0);
        assert_eq!(sphere.intersect(&Ray::new(Vec3::ZERO, Vec3::X)), Some(2.0));

        let aabb = Collider::aabb(Vec3::splat(-1.0), Vec3::splat(1.0), 0);
        assert_eq!(aabb.intersect(&Ray::new(Vec3::ZERO, Vec3::Y)), Some(0.0));
    }
}
