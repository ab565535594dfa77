use crate::color::{Color, BLACK, WHITE};
use crate::intersection::{hit, prepare_computations, sort_intersections, Computations, Intersections};
use crate::light::PointLight;
use crate::lighting::lighting;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::transform::scaling;
use crate::tuple::Point;

/// Everything a render needs besides the camera. Read-only while rendering.
#[derive(Clone, Debug)]
pub struct World {
    pub light: PointLight,
    pub objects: Vec<Sphere>,
}

impl World {
    pub fn new(light: PointLight) -> Self {
        Self {
            light,
            objects: Vec::new(),
        }
    }

    /// Two concentric spheres lit from the upper left: an outer unit sphere
    /// and an inner one of radius 0.5.
    pub fn default_world() -> Self {
        let outer = Sphere::new().with_material(Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        });
        let inner = Sphere::with_transform(scaling(0.5, 0.5, 0.5));

        Self {
            light: PointLight::new(Point::new(-10.0, 10.0, -10.0), WHITE),
            objects: vec![outer, inner],
        }
    }

    pub fn add(&mut self, sphere: Sphere) {
        self.objects.push(sphere);
    }

    /// Every intersection of `ray` with every object, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let mut xs: Intersections = self.objects.iter().flat_map(|s| s.intersect(ray)).collect();
        sort_intersections(&mut xs);
        xs
    }

    /// Whether something sits between `point` and the light.
    pub fn is_shadowed(&self, point: Point) -> bool {
        let v = self.light.position - point;
        let distance = v.magnitude();
        let ray = Ray::new(point, v.normalize());

        let xs = self.intersect(&ray);
        hit(&xs).map_or(false, |h| h.t < distance)
    }

    pub fn shade_hit(&self, comps: &Computations) -> Color {
        let shadowed = self.is_shadowed(comps.over_point);
        lighting(
            &comps.object.material,
            &self.light,
            comps.over_point,
            comps.eyev,
            comps.normalv,
            shadowed,
        )
    }

    /// Color seen along `ray`; black when it hits nothing.
    pub fn color_at(&self, ray: &Ray) -> Color {
        let xs = self.intersect(ray);
        hit(&xs)
            .and_then(|h| prepare_computations(h, ray).ok())
            .map_or(BLACK, |comps| self.shade_hit(&comps))
    }
}

#[cfg(test)]
use crate::intersection::Intersection;
#[cfg(test)]
use crate::transform::translation;
#[cfg(test)]
use crate::tuple::Vector;

#[test]
fn default_world_contents() {
    let w = World::default_world();
    assert_eq!(PointLight::new(Point::new(-10.0, 10.0, -10.0), WHITE), w.light);
    assert_eq!(2, w.objects.len());
    assert_eq!(Color::new(0.8, 1.0, 0.6), w.objects[0].material.color);
    assert_eq!(&scaling(0.5, 0.5, 0.5), w.objects[1].transform());
}

#[test]
fn intersecting_world_sorts_hits() {
    let w = World::default_world();
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let ts: Vec<f64> = w.intersect(&ray).iter().map(|x| x.t).collect();
    assert_eq!(4, ts.len());
    assert_approx_eq!(4.0, ts[0]);
    assert_approx_eq!(4.5, ts[1]);
    assert_approx_eq!(5.5, ts[2]);
    assert_approx_eq!(6.0, ts[3]);
}

#[test]
fn shading_an_intersection() {
    let w = World::default_world();
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let i = Intersection::new(4.0, &w.objects[0]);
    let comps = prepare_computations(&i, &ray).unwrap();
    assert_approx_eq!(Color::new(0.38066, 0.47583, 0.2855), w.shade_hit(&comps));
}

#[test]
fn shading_an_intersection_from_inside() {
    let mut w = World::default_world();
    w.light = PointLight::new(Point::new(0.0, 0.25, 0.0), WHITE);
    let ray = Ray::new(Point::origin(), Vector::new(0.0, 0.0, 1.0));
    let i = Intersection::new(0.5, &w.objects[1]);
    let comps = prepare_computations(&i, &ray).unwrap();
    assert_approx_eq!(Color::new(0.90498, 0.90498, 0.90498), w.shade_hit(&comps));
}

#[test]
fn shading_an_intersection_in_shadow() {
    let mut w = World::new(PointLight::new(Point::new(0.0, 0.0, -10.0), WHITE));
    w.add(Sphere::new());
    w.add(Sphere::with_transform(translation(0.0, 0.0, 10.0)));
    let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));
    let i = Intersection::new(4.0, &w.objects[1]);
    let comps = prepare_computations(&i, &ray).unwrap();
    assert_approx_eq!(Color::new(0.1, 0.1, 0.1), w.shade_hit(&comps));
}

#[test]
fn color_when_ray_misses() {
    let w = World::default_world();
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 1.0, 0.0));
    assert_approx_eq!(BLACK, w.color_at(&ray));
}

#[test]
fn color_when_ray_hits() {
    let w = World::default_world();
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    assert_approx_eq!(Color::new(0.38066, 0.47583, 0.2855), w.color_at(&ray));
}

#[test]
fn color_with_intersection_behind_ray() {
    let mut w = World::default_world();
    w.objects[0].material.ambient = 1.0;
    w.objects[1].material.ambient = 1.0;
    let ray = Ray::new(Point::new(0.0, 0.0, 0.75), Vector::new(0.0, 0.0, -1.0));
    assert_approx_eq!(w.objects[1].material.color, w.color_at(&ray));
}

#[test]
fn shadow_tests() {
    let w = World::default_world();
    // Nothing collinear with point and light.
    assert!(!w.is_shadowed(Point::new(0.0, 10.0, 0.0)));
    // Object between point and light.
    assert!(w.is_shadowed(Point::new(10.0, -10.0, 10.0)));
    // Light between point and object.
    assert!(!w.is_shadowed(Point::new(-20.0, 20.0, -20.0)));
    // Object behind the point.
    assert!(!w.is_shadowed(Point::new(-2.0, 2.0, -2.0)));
}

#[test]
fn singular_sphere_does_not_break_the_world() {
    let mut w = World::default_world();
    w.add(Sphere::with_transform(scaling(1.0, 0.0, 1.0)));
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(4, w.intersect(&ray).len());
    assert_approx_eq!(Color::new(0.38066, 0.47583, 0.2855), w.color_at(&ray));
}
