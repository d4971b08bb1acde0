//! Randomize animation driven frame by frame.

use tv_render::RecordingSurface;
use tv_scene::{Scene, SceneConfig};

const DT: f32 = 0.05;

fn quiet_scene(config: SceneConfig) -> Scene {
    Scene::new(SceneConfig {
        tensor_count: 0,
        ..config
    })
    .unwrap()
}

#[test]
fn test_animation_runs_for_duration_then_holds() {
    let mut scene = quiet_scene(SceneConfig::seeded(11));
    let h = scene.push(vec![2usize, 2], vec![10.0, -20.0, 30.0, -40.0]);
    let initial = scene.tensor(h).unwrap().as_slice().to_vec();

    scene.randomize();
    let velocity = scene.animation().unwrap().velocities()[0].as_slice().to_vec();
    assert!(velocity.iter().all(|v| (-600.0..600.0).contains(v)));

    let mut steps = 0;
    let mut surface = RecordingSurface::new();
    while scene.is_animating() {
        let report = scene.frame(DT, &mut surface).unwrap();
        if report.animated {
            steps += 1;
        }
        assert!(steps <= 200, "animation never finished");
    }
    // 8 seconds at 20 fps, give or take float accumulation
    assert!((160..=161).contains(&steps), "steps = {steps}");

    let moved = scene.tensor(h).unwrap().as_slice().to_vec();
    for ((m, i), v) in moved.iter().zip(&initial).zip(&velocity) {
        let expected = i + v * DT * steps as f32;
        assert!((m - expected).abs() < 0.5, "{m} vs {expected}");
    }

    // values hold once the countdown is spent
    assert!(!scene.update(DT).unwrap());
    assert_eq!(scene.tensor(h).unwrap().as_slice(), moved.as_slice());
}

#[test]
fn test_text_panel_follows_values() {
    let mut scene = quiet_scene(SceneConfig::seeded(3));
    let h = scene.push(vec![3usize], vec![1.0, 2.0, 3.0]);
    assert_eq!(scene.text(h).unwrap(), "[ 1, 2, 3 ]");

    scene.randomize();
    scene.update(DT).unwrap();
    let t = scene.tensor(h).unwrap();
    assert_eq!(scene.text(h).unwrap(), t.pretty());
    assert_ne!(scene.text(h).unwrap(), "[ 1, 2, 3 ]");
}

#[test]
fn test_slow_animation_keeps_cached_layout() {
    let mut scene = quiet_scene(SceneConfig {
        randomize_speed: 1e-3,
        ..SceneConfig::seeded(5)
    });
    scene.push(vec![2usize, 3], vec![1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
    let mut surface = RecordingSurface::new();

    let first = scene.frame(DT, &mut surface).unwrap();
    assert_eq!((first.fresh, first.cached), (1, 0));

    scene.randomize();
    for _ in 0..10 {
        let report = scene.frame(DT, &mut surface).unwrap();
        assert!(report.animated);
        assert_eq!((report.fresh, report.cached), (0, 1));
    }
}

#[test]
fn test_fast_animation_recomputes_layout() {
    let mut scene = quiet_scene(SceneConfig {
        randomize_speed: 600.0,
        ..SceneConfig::seeded(9)
    });
    // every element starts at 1.x, one big step moves its leading digit
    scene.push(vec![8usize], vec![1.0; 8]);
    let mut surface = RecordingSurface::new();
    scene.frame(DT, &mut surface).unwrap();

    scene.randomize();
    let report = scene.frame(1.0, &mut surface).unwrap();
    assert!(report.animated);
    assert_eq!(report.fresh, 1);
}

#[test]
fn test_randomize_restarts_countdown() {
    let mut scene = quiet_scene(SceneConfig::seeded(2));
    scene.push(vec![1usize], vec![1.0]);

    scene.randomize();
    for _ in 0..40 {
        scene.update(DT).unwrap();
    }
    assert!(scene.animation().unwrap().remaining() < 7.0);

    scene.randomize();
    assert!((scene.animation().unwrap().remaining() - 8.0).abs() < 1e-6);
}

#[test]
fn test_scalar_scene() {
    let mut scene = Scene::new(SceneConfig {
        rank_range: 0..=0,
        ..SceneConfig::seeded(4)
    })
    .unwrap();
    scene.generate();
    assert_eq!(scene.len(), 4);

    let mut surface = RecordingSurface::new();
    let report = scene.frame(DT, &mut surface).unwrap();
    assert_eq!(report.fresh, 4);
    // panels only
    assert_eq!(surface.rects(), 4);
    assert_eq!(surface.lines(), 0);
    for text in scene.text_panels() {
        assert!(text.parse::<f32>().is_ok(), "{text}");
    }
}
