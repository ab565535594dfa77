//! JSON scene descriptions.
//!
//! ```json
//! {
//!   "camera": {"width": 100, "height": 50, "field_of_view": 1.047,
//!              "from": [0, 1.5, -5], "to": [0, 1, 0], "up": [0, 1, 0]},
//!   "light": {"position": [-10, 10, -10], "intensity": [1, 1, 1]},
//!   "spheres": [
//!     {"transforms": [{"type": "scale", "x": 0.5, "y": 0.5, "z": 0.5},
//!                     {"type": "translate", "x": 1.5, "y": 0.5, "z": -0.5}],
//!      "material": {"color": [0.5, 1, 0.1], "diffuse": 0.7, "specular": 0.3}}
//!   ]
//! }
//! ```
//!
//! Transforms are listed in the order they apply to the sphere.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::light::PointLight;
use crate::material::Material;
use crate::matrix::Matrix4x4;
use crate::sphere::Sphere;
use crate::transform::{
    chain_transforms, rotation_x, rotation_y, rotation_z, scaling, shearing, translation, view_transform,
};
use crate::tuple::{Point, Vector};
use crate::world::World;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformDescription {
    Translate { x: f64, y: f64, z: f64 },
    Scale { x: f64, y: f64, z: f64 },
    RotateX { radians: f64 },
    RotateY { radians: f64 },
    RotateZ { radians: f64 },
    Shear { xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64 },
    Matrix { rows: Matrix4x4 },
}

impl TransformDescription {
    pub fn to_matrix(&self) -> Matrix4x4 {
        match *self {
            TransformDescription::Translate { x, y, z } => translation(x, y, z),
            TransformDescription::Scale { x, y, z } => scaling(x, y, z),
            TransformDescription::RotateX { radians } => rotation_x(radians),
            TransformDescription::RotateY { radians } => rotation_y(radians),
            TransformDescription::RotateZ { radians } => rotation_z(radians),
            TransformDescription::Shear { xy, xz, yx, yz, zx, zy } => shearing(xy, xz, yx, yz, zx, zy),
            TransformDescription::Matrix { rows } => rows,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CameraDescription {
    pub width: usize,
    pub height: usize,
    pub field_of_view: f64,
    pub from: Point,
    pub to: Point,
    #[serde(default = "default_up")]
    pub up: Vector,
}

fn default_up() -> Vector {
    Vector::new(0.0, 1.0, 0.0)
}

#[derive(Debug, Deserialize)]
pub struct SphereDescription {
    #[serde(default)]
    pub transforms: Vec<TransformDescription>,
    #[serde(default)]
    pub material: Material,
}

#[derive(Debug, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub light: PointLight,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

/// A world together with the camera that looks at it.
#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub world: World,
}

impl Scene {
    pub fn load<P: AsRef<Path>>(path: &P) -> Result<Self> {
        let file = File::open(path)?;
        let description: SceneDescription = serde_json::from_reader(BufReader::new(file))?;
        let scene = Scene::build(description)?;

        info!(
            "Loaded scene {} with {} spheres",
            path.as_ref().display(),
            scene.world.objects.len()
        );
        Ok(scene)
    }

    pub fn build(description: SceneDescription) -> Result<Self> {
        let CameraDescription {
            width,
            height,
            field_of_view,
            from,
            to,
            up,
        } = description.camera;
        let mut camera = Camera::new(width, height, field_of_view);
        camera.set_transform(view_transform(from, to, up))?;

        let mut world = World::new(description.light);
        for sphere in description.spheres {
            let transforms: Vec<Matrix4x4> = sphere.transforms.iter().map(TransformDescription::to_matrix).collect();
            world.add(Sphere::with_transform(chain_transforms(&transforms)).with_material(sphere.material));
        }

        Ok(Scene { camera, world })
    }
}

impl FromStr for Scene {
    type Err = Error;

    fn from_str(json: &str) -> Result<Self> {
        Scene::build(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
use crate::color::Color;

#[cfg(test)]
const SCENE: &str = r#"{
    "camera": {"width": 40, "height": 20, "field_of_view": 1.0472,
               "from": [0, 1.5, -5], "to": [0, 1, 0]},
    "light": {"position": [-10, 10, -10], "intensity": [1, 1, 1]},
    "spheres": [
        {"transforms": [{"type": "scale", "x": 10, "y": 0.01, "z": 10}],
         "material": {"color": [1, 0.9, 0.9], "specular": 0}},
        {"transforms": [{"type": "scale", "x": 0.5, "y": 0.5, "z": 0.5},
                        {"type": "translate", "x": 1.5, "y": 0.5, "z": -0.5}]},
        {}
    ]
}"#;

#[test]
fn building_a_scene_from_json() {
    let scene = SCENE.parse::<Scene>().unwrap();
    assert_eq!(40, scene.camera.hsize());
    assert_eq!(20, scene.camera.vsize());
    assert_eq!(3, scene.world.objects.len());
    assert_eq!(Color::new(1.0, 0.9, 0.9), scene.world.objects[0].material.color);
    assert_eq!(0.0, scene.world.objects[0].material.specular);
    assert_eq!(Material::default(), scene.world.objects[2].material);
    assert_eq!(&Matrix4x4::identity(), scene.world.objects[2].transform());
}

#[test]
fn transforms_apply_in_listed_order() {
    let scene = SCENE.parse::<Scene>().unwrap();
    let expected = translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5);
    assert_approx_eq!(expected, *scene.world.objects[1].transform());
}

#[test]
fn explicit_matrix_transform() {
    let t: TransformDescription = serde_json::from_str(
        r#"{"type": "matrix", "rows": [[1, 0, 0, 3], [0, 1, 0, 4], [0, 0, 1, 5], [0, 0, 0, 1]]}"#,
    )
    .unwrap();
    assert_approx_eq!(translation(3.0, 4.0, 5.0), t.to_matrix());
}

#[test]
fn malformed_scene_is_an_error() {
    assert!(r#"{"camera": {}}"#.parse::<Scene>().is_err());
    assert!("not json".parse::<Scene>().is_err());
}

#[test]
fn camera_looking_along_up_is_rejected() {
    let json = r#"{
        "camera": {"width": 4, "height": 4, "field_of_view": 1.0,
                   "from": [0, 0, 0], "to": [0, 1, 0], "up": [0, 1, 0]},
        "light": {"position": [0, 0, 0], "intensity": [1, 1, 1]}
    }"#;
    assert!(json.parse::<Scene>().is_err());
}
