use crate::color::{Color, BLACK};
use crate::light::PointLight;
use crate::material::Material;
use crate::tuple::{Point, Vector};

/// Phong reflection: ambient + diffuse + specular at one surface point.
///
/// `eyev` and `normalv` must be unit vectors. A point in shadow only gets
/// the ambient term. The result is not clamped.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Point,
    eyev: Vector,
    normalv: Vector,
    in_shadow: bool,
) -> Color {
    let effective_color = material.color * light.intensity;
    let ambient = effective_color * material.ambient;
    if in_shadow {
        return ambient;
    }

    let lightv = (light.position - point).normalize();
    let light_dot_normal = lightv.dot(&normalv);

    let diffuse = if light_dot_normal > 0.0 {
        effective_color * material.diffuse * light_dot_normal
    } else {
        BLACK
    };

    let reflectv = (-lightv).reflect(&normalv);
    let reflect_dot_eye = reflectv.dot(&eyev);
    let specular = if reflect_dot_eye > 0.0 {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    } else {
        BLACK
    };

    ambient + diffuse + specular
}

#[cfg(test)]
use crate::color::WHITE;

#[cfg(test)]
fn surface() -> (Material, Point) {
    (Material::default(), Point::origin())
}

#[test]
fn eye_between_light_and_surface() {
    let (m, position) = surface();
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 0.0, -10.0), WHITE);
    assert_approx_eq!(Color::new(1.9, 1.9, 1.9), lighting(&m, &light, position, eyev, normalv, false));
}

#[test]
fn eye_offset_45_degrees() {
    let (m, position) = surface();
    let k = 2f64.sqrt() / 2.0;
    let eyev = Vector::new(0.0, k, -k);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 0.0, -10.0), WHITE);
    assert_approx_eq!(Color::new(1.0, 1.0, 1.0), lighting(&m, &light, position, eyev, normalv, false));
}

#[test]
fn light_offset_45_degrees() {
    let (m, position) = surface();
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 10.0, -10.0), WHITE);
    assert_approx_eq!(
        Color::new(0.7364, 0.7364, 0.7364),
        lighting(&m, &light, position, eyev, normalv, false)
    );
}

#[test]
fn eye_in_path_of_reflection() {
    let (m, position) = surface();
    let k = 2f64.sqrt() / 2.0;
    let eyev = Vector::new(0.0, -k, -k);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 10.0, -10.0), WHITE);
    assert_approx_eq!(
        Color::new(1.6364, 1.6364, 1.6364),
        lighting(&m, &light, position, eyev, normalv, false)
    );
}

#[test]
fn light_behind_surface() {
    let (m, position) = surface();
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 0.0, 10.0), WHITE);
    assert_approx_eq!(Color::new(0.1, 0.1, 0.1), lighting(&m, &light, position, eyev, normalv, false));
}

#[test]
fn surface_in_shadow() {
    let (m, position) = surface();
    let eyev = Vector::new(0.0, 0.0, -1.0);
    let normalv = Vector::new(0.0, 0.0, -1.0);
    let light = PointLight::new(Point::new(0.0, 0.0, -10.0), WHITE);
    assert_approx_eq!(Color::new(0.1, 0.1, 0.1), lighting(&m, &light, position, eyev, normalv, true));
}
