use crate::error::Result;
use crate::float::EPSILON;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::tuple::{Point, Vector};

/// Where along a ray an object was crossed.
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

pub type Intersections<'a> = Vec<Intersection<'a>>;

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Self { t, object }
    }
}

pub fn sort_intersections(xs: &mut [Intersection]) {
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
}

/// The visible intersection: smallest `t` strictly in front of the origin.
///
/// Anything at or behind the origin is never picked, even when nothing else
/// is left.
pub fn hit<'a, 'b>(xs: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    xs.iter().filter(|x| x.t > 0.0).min_by(|a, b| a.t.total_cmp(&b.t))
}

/// Geometry at a hit, precomputed for shading.
#[derive(Copy, Clone, Debug)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a Sphere,
    pub point: Point,
    /// `point` nudged off the surface along the normal; shadow rays start here
    /// so the surface does not shadow itself.
    pub over_point: Point,
    pub eyev: Vector,
    pub normalv: Vector,
    pub inside: bool,
}

pub fn prepare_computations<'a>(intersection: &Intersection<'a>, ray: &Ray) -> Result<Computations<'a>> {
    let point = ray.position(intersection.t);
    let eyev = -ray.direction;
    let mut normalv = intersection.object.normal_at(point)?;

    let inside = normalv.dot(&eyev) < 0.0;
    if inside {
        normalv = -normalv;
    }

    Ok(Computations {
        t: intersection.t,
        object: intersection.object,
        point,
        over_point: point + normalv * EPSILON,
        eyev,
        normalv,
        inside,
    })
}

#[cfg(test)]
use crate::transform::translation;

#[test]
fn intersection_holds_t_and_object() {
    let s = Sphere::new();
    let i = Intersection::new(3.5, &s);
    assert_eq!(3.5, i.t);
    assert!(std::ptr::eq(&s, i.object));
}

#[test]
fn hit_when_all_positive() {
    let s = Sphere::new();
    let xs = vec![Intersection::new(1.0, &s), Intersection::new(2.0, &s)];
    assert_eq!(Some(1.0), hit(&xs).map(|x| x.t));
}

#[test]
fn hit_when_some_negative() {
    let s = Sphere::new();
    let xs = vec![Intersection::new(-1.0, &s), Intersection::new(1.0, &s)];
    assert_eq!(Some(1.0), hit(&xs).map(|x| x.t));
}

#[test]
fn no_hit_when_all_behind() {
    let s = Sphere::new();
    let xs = vec![Intersection::new(-2.0, &s), Intersection::new(-1.0, &s)];
    assert!(hit(&xs).is_none());
    assert!(hit(&[]).is_none());
}

#[test]
fn hit_is_lowest_positive() {
    let s = Sphere::new();
    let xs = vec![
        Intersection::new(5.0, &s),
        Intersection::new(7.0, &s),
        Intersection::new(-3.0, &s),
        Intersection::new(2.0, &s),
    ];
    assert_eq!(Some(2.0), hit(&xs).map(|x| x.t));
}

#[test]
fn sorting_orders_by_t() {
    let s = Sphere::new();
    let mut xs = vec![
        Intersection::new(5.0, &s),
        Intersection::new(-3.0, &s),
        Intersection::new(2.0, &s),
    ];
    sort_intersections(&mut xs);
    assert_eq!(vec![-3.0, 2.0, 5.0], xs.iter().map(|x| x.t).collect::<Vec<_>>());
}

#[test]
fn precomputing_outside_hit() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::new();
    let comps = prepare_computations(&Intersection::new(4.0, &s), &ray).unwrap();
    assert_eq!(4.0, comps.t);
    assert!(std::ptr::eq(&s, comps.object));
    assert_approx_eq!(Point::new(0.0, 0.0, -1.0), comps.point);
    assert_approx_eq!(Vector::new(0.0, 0.0, -1.0), comps.eyev);
    assert_approx_eq!(Vector::new(0.0, 0.0, -1.0), comps.normalv);
    assert!(!comps.inside);
}

#[test]
fn precomputing_inside_hit_flips_normal() {
    let ray = Ray::new(Point::origin(), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::new();
    let comps = prepare_computations(&Intersection::new(1.0, &s), &ray).unwrap();
    assert_approx_eq!(Point::new(0.0, 0.0, 1.0), comps.point);
    assert_approx_eq!(Vector::new(0.0, 0.0, -1.0), comps.eyev);
    assert_approx_eq!(Vector::new(0.0, 0.0, -1.0), comps.normalv);
    assert!(comps.inside);
}

#[test]
fn over_point_sits_above_the_surface() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::with_transform(translation(0.0, 0.0, 1.0));
    let comps = prepare_computations(&Intersection::new(5.0, &s), &ray).unwrap();
    assert!(comps.over_point.z < -EPSILON / 2.0);
    assert!(comps.point.z > comps.over_point.z);
}
