//! Scene of named shapes and their pairwise collisions

use affine3d_collision::{shapes_collide, Shape};
use serde::{Deserialize, Serialize};

/// A shape with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedShape {
    pub name: String,
    #[serde(flatten)]
    pub shape: Shape,
}

impl NamedShape {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Outcome of testing one pair of shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairResult {
    /// Index of the first shape
    pub a: usize,
    /// Index of the second shape
    pub b: usize,
    pub colliding: bool,
}

/// A flat list of shapes
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<NamedShape>,
}

impl Scene {
    pub fn new(shapes: Vec<NamedShape>) -> Self {
        Self { shapes }
    }

    /// Add a shape and return its index
    pub fn add(&mut self, shape: NamedShape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn shapes(&self) -> &[NamedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Test every pair that has a predicate
    ///
    /// Pairs without one (e.g. sphere/triangle) are skipped.
    pub fn evaluate(&self) -> Vec<PairResult> {
        let mut results = Vec::new();
        for (i, a) in self.shapes.iter().enumerate() {
            for (j, b) in self.shapes.iter().enumerate().skip(i + 1) {
                match shapes_collide(&a.shape, &b.shape) {
                    Some(colliding) => {
                        log::debug!("{} ({}) vs {} ({}): {}", a.name, a.shape.kind(), b.name, b.shape.kind(), colliding);
                        results.push(PairResult { a: i, b: j, colliding });
                    }
                    None => {
                        log::trace!("No predicate for {} vs {}", a.shape.kind(), b.shape.kind());
                    }
                }
            }
        }
        results
    }

    /// Per shape: does it collide with anything?
    pub fn colliding_flags(&self, results: &[PairResult]) -> Vec<bool> {
        let mut flags = vec![false; self.shapes.len()];
        for r in results.iter().filter(|r| r.colliding) {
            flags[r.a] = true;
            flags[r.b] = true;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affine3d_collision::{Plane, Sphere, Triangle};
    use affine3d_math::Vec3;

    fn sample_scene() -> Scene {
        let mut scene = Scene::default();
        scene.add(NamedShape::new("a", Shape::Sphere(Sphere::new(Vec3::ZERO, 1.0))));
        scene.add(NamedShape::new("b", Shape::Sphere(Sphere::new(Vec3::new(1.9, 0.0, 0.0), 1.0))));
        scene.add(NamedShape::new("floor", Shape::Plane(Plane::new(Vec3::Y, -5.0))));
        scene.add(NamedShape::new("tri", Shape::Triangle(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y))));
        scene
    }

    #[test]
    fn test_evaluate_skips_unsupported_pairs() {
        let scene = sample_scene();
        let results = scene.evaluate();
        // sphere/sphere, sphere/plane twice; triangle pairs have no predicate
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], PairResult { a: 0, b: 1, colliding: true });
        assert!(!results[1].colliding);
    }

    #[test]
    fn test_colliding_flags() {
        let scene = sample_scene();
        let flags = scene.colliding_flags(&scene.evaluate());
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        assert!(scene.is_empty());
        assert!(scene.evaluate().is_empty());
    }
}
