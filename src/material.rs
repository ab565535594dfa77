use crate::color::{Color, WHITE};

/// Phong surface parameters.
///
/// `ambient`, `diffuse` and `specular` are weights in `[0, 1]`; `shininess`
/// is the specular exponent, usually between 10 and 200.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

#[test]
fn default_material() {
    let m = Material::default();
    assert_eq!(WHITE, m.color);
    assert_eq!(0.1, m.ambient);
    assert_eq!(0.9, m.diffuse);
    assert_eq!(0.9, m.specular);
    assert_eq!(200.0, m.shininess);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let m: Material = serde_json::from_str(r#"{"color": [1, 0.2, 1], "diffuse": 0.7}"#).unwrap();
    assert_eq!(Color::new(1.0, 0.2, 1.0), m.color);
    assert_eq!(0.7, m.diffuse);
    assert_eq!(0.9, m.specular);
}
