//! Scene viewer demo application
//!
//! Loads a level document, instantiates it, and drives a few frames of the
//! update/draw loop against the headless backend, printing what each frame
//! submits.

use scene_engine::prelude::*;

const FRAMES: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();

    let config = SceneConfig {
        scene_path: "viewer_app/resources/levels/scene.json".to_string(),
        ..SceneConfig::default()
    };
    let loader = ObjModelLoader::new("viewer_app/resources/models");

    log::info!("Loading scene from {}", config.scene_path);
    let mut scene = Scene::load(&config, &loader)?;
    println!(
        "Loaded scene with {} object(s), {} unique model(s)",
        scene.objects().len(),
        scene.model_cache().len()
    );

    let mut backend = HeadlessBackend::new();
    for frame in 0..FRAMES {
        scene.update();
        scene.draw(&mut backend)?;
        println!("frame {frame}:");
        for draw in backend.draws() {
            println!(
                "  draw {} at ({:.1}, {:.1}, {:.1})",
                draw.model, draw.translation.x, draw.translation.y, draw.translation.z
            );
        }
        backend.reset();
    }

    Ok(())
}
