use lumen::color::BLACK;
use lumen::{Camera, Scene};

fn bundled_scene() -> Scene {
    Scene::load(&concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/three_spheres.json")).unwrap()
}

#[test]
fn bundled_scene_loads() {
    let scene = bundled_scene();
    assert_eq!(400, scene.camera.hsize());
    assert_eq!(200, scene.camera.vsize());
    assert_eq!(6, scene.world.objects.len());
}

#[test]
fn bundled_scene_renders_at_reduced_size() {
    let scene = bundled_scene();
    let mut camera = Camera::new(40, 20, scene.camera.field_of_view());
    camera.set_transform(*scene.camera.transform()).unwrap();

    let canvas = lumen::render(&camera, &scene.world);
    assert_eq!((40, 20), (canvas.width(), canvas.height()));

    // The middle sphere sits in front of the camera.
    assert_ne!(BLACK, canvas.pixel_at(20, 10));

    let lit = (0..20)
        .flat_map(|y| (0..40).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel_at(x, y) != BLACK)
        .count();
    assert!(lit > 40 * 20 / 2);
}

#[test]
fn rendered_scene_saves_as_ppm() {
    let scene = bundled_scene();
    let camera = {
        let mut c = Camera::new(8, 4, scene.camera.field_of_view());
        c.set_transform(*scene.camera.transform()).unwrap();
        c
    };
    let canvas = camera.render(&scene.world);

    let mut out = Vec::new();
    canvas.write_ppm(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("P3\n8 4\n255\n"));
    assert_eq!(3 + 8 * 4, text.lines().count());
}
