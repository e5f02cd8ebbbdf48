// Host-side tests for the particle field simulator.
// The web crate is wasm-only, so these exercise `folio-core` directly.

use folio_core::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
    Particle {
        pos: DVec2::new(x, y),
        vel: DVec2::new(vx, vy),
        size: 1.0,
        opacity: 0.3,
    }
}

fn field_with(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
    let mut f = ParticleField::new(FieldConfig::default());
    f.width = width;
    f.height = height;
    f.particles = particles;
    f
}

fn seeded_field(width: f64, height: f64, seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut f = ParticleField::new(FieldConfig::default());
    f.resize(width, height, &mut rng);
    f
}

#[test]
fn particle_count_follows_width() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count(1200.0, &cfg), 80);
    assert_eq!(particle_count(150.0, &cfg), 10);
    assert_eq!(particle_count(10.0, &cfg), 0);
    assert_eq!(particle_count(0.0, &cfg), 0);
    assert_eq!(particle_count(14.99, &cfg), 0);
    assert_eq!(particle_count(15.0, &cfg), 1);
    assert_eq!(particle_count(1199.0, &cfg), 79);
    assert_eq!(particle_count(5000.0, &cfg), 80);
}

#[test]
fn particle_count_handles_degenerate_widths() {
    let cfg = FieldConfig::default();
    assert_eq!(particle_count(-300.0, &cfg), 0);
    assert_eq!(particle_count(f64::NAN, &cfg), 0);
    assert_eq!(particle_count(f64::INFINITY, &cfg), 80);
}

#[test]
fn particle_count_for_every_integer_width() {
    let cfg = FieldConfig::default();
    for w in 0..2000u32 {
        let expected = (w / 15).min(80) as usize;
        assert_eq!(particle_count(w as f64, &cfg), expected, "width {w}");
    }
}

#[test]
fn init_randomizes_within_ranges() {
    let f = seeded_field(1200.0, 800.0, 7);
    assert_eq!(f.len(), 80);
    for p in &f.particles {
        assert!((0.0..1200.0).contains(&p.pos.x));
        assert!((0.0..800.0).contains(&p.pos.y));
        assert!((0.5..2.5).contains(&p.size));
        assert!((-0.25..0.25).contains(&p.vel.x));
        assert!((-0.25..0.25).contains(&p.vel.y));
        assert!((0.1..0.5).contains(&p.opacity));
    }
}

#[test]
fn zero_height_surface_still_initializes() {
    let f = seeded_field(300.0, 0.0, 3);
    assert_eq!(f.len(), 20);
    assert!(f.particles.iter().all(|p| p.pos.y == 0.0));
}

#[test]
fn reinit_keeps_count_but_not_values() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut f = ParticleField::new(FieldConfig::default());
    f.init_particles(900.0, 600.0, &mut rng);
    let first = f.particles.clone();
    f.init_particles(900.0, 600.0, &mut rng);
    assert_eq!(f.len(), first.len());
    assert_eq!(f.len(), 60);
    assert_ne!(f.particles, first);
}

#[test]
fn same_seed_gives_same_field() {
    let a = seeded_field(640.0, 480.0, 99);
    let b = seeded_field(640.0, 480.0, 99);
    assert_eq!(a.particles, b.particles);
}

#[test]
fn resize_updates_dimensions_then_rebuilds() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut f = seeded_field(1200.0, 800.0, 1);
    f.resize(150.0, 300.0, &mut rng);
    assert_eq!(f.width, 150.0);
    assert_eq!(f.height, 300.0);
    assert_eq!(f.len(), 10);
    assert!(f.particles.iter().all(|p| p.pos.x < 150.0 && p.pos.y < 300.0));
}

#[test]
fn update_moves_by_velocity_inside_bounds() {
    let mut p = particle(50.0, 40.0, 0.2, -0.1);
    p.update(100.0, 100.0);
    assert!((p.pos.x - 50.2).abs() < 1e-12);
    assert!((p.pos.y - 39.9).abs() < 1e-12);
    assert_eq!(p.vel, DVec2::new(0.2, -0.1));
}

#[test]
fn update_reflects_after_crossing_left_edge_without_clamping() {
    let mut p = particle(0.1, 50.0, -0.2, 0.0);
    p.update(100.0, 100.0);
    assert!(p.pos.x < 0.0, "position is not clamped back inside");
    assert!((p.pos.x + 0.1).abs() < 1e-12);
    assert_eq!(p.vel.x, 0.2);
    // next frame brings it back inside
    p.update(100.0, 100.0);
    assert!(p.pos.x > 0.0);
    assert_eq!(p.vel.x, 0.2);
}

#[test]
fn update_reflects_each_axis_independently() {
    let mut p = particle(99.9, 50.0, 0.2, 0.1);
    p.update(100.0, 100.0);
    assert_eq!(p.vel.x, -0.2);
    assert_eq!(p.vel.y, 0.1);

    let mut q = particle(50.0, 99.95, 0.1, 0.1);
    q.update(100.0, 100.0);
    assert_eq!(q.vel.x, 0.1);
    assert_eq!(q.vel.y, -0.1);
}

#[test]
fn landing_exactly_on_edge_does_not_reflect() {
    let mut p = particle(99.5, 0.5, 0.5, -0.5);
    p.update(100.0, 100.0);
    assert_eq!(p.pos, DVec2::new(100.0, 0.0));
    assert_eq!(p.vel, DVec2::new(0.5, -0.5));
}

#[test]
fn frames_never_change_size_or_opacity_and_overshoot_is_bounded() {
    let mut f = seeded_field(1200.0, 800.0, 42);
    let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.size, p.opacity)).collect();
    let mut surface = RecordingSurface::new();
    for _ in 0..2000 {
        surface.clear();
        f.frame(&mut surface);
        for p in &f.particles {
            assert!(p.pos.x >= -0.25 && p.pos.x <= 1200.25);
            assert!(p.pos.y >= -0.25 && p.pos.y <= 800.25);
        }
    }
    let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.size, p.opacity)).collect();
    assert_eq!(before, after);
}

#[test]
fn link_alpha_fades_to_zero_at_threshold() {
    let cfg = FieldConfig::default();
    assert_eq!(link_alpha(0.0, &cfg), Some(0.06));
    let half = link_alpha(60.0, &cfg).unwrap();
    assert!((half - 0.03).abs() < 1e-12);
    let near = link_alpha(119.9, &cfg).unwrap();
    assert!(near > 0.0 && near < 1e-4);
    assert_eq!(link_alpha(120.0, &cfg), None);
    assert_eq!(link_alpha(500.0, &cfg), None);
}

#[test]
fn links_cover_each_close_pair_once() {
    let f = field_with(
        1000.0,
        1000.0,
        vec![
            particle(0.0, 0.0, 0.0, 0.0),
            particle(30.0, 40.0, 0.0, 0.0),  // 50 from #0
            particle(120.0, 0.0, 0.0, 0.0),  // exactly 120 from #0
            particle(900.0, 900.0, 0.0, 0.0), // far from all
        ],
    );
    let links: Vec<Link> = f.links().collect();
    let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
    // #1-#2: dx=90, dy=-40 -> ~98.5
    assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    assert!((links[0].distance - 50.0).abs() < 1e-12);
    assert!((links[0].alpha - 0.06 * (1.0 - 50.0 / 120.0)).abs() < 1e-12);
    for l in &links {
        assert!(l.a < l.b);
        assert!((l.alpha - 0.06 * (1.0 - l.distance / 120.0)).abs() < 1e-12);
    }
}

#[test]
fn link_count_matches_brute_force_on_random_field() {
    let f = seeded_field(800.0, 600.0, 2024);
    let mut expected = 0;
    for i in 0..f.len() {
        for j in (i + 1)..f.len() {
            if f.particles[i].pos.distance(f.particles[j].pos) < 120.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(f.links().count(), expected);

    let mut surface = RecordingSurface::new();
    f.connect_particles(&mut surface);
    assert_eq!(surface.stroke_count(), expected);
}

#[test]
fn connect_draws_faded_indigo_lines() {
    let f = field_with(
        500.0,
        500.0,
        vec![particle(10.0, 10.0, 0.0, 0.0), particle(70.0, 10.0, 0.0, 0.0)],
    );
    let mut surface = RecordingSurface::new();
    f.connect_particles(&mut surface);
    assert_eq!(
        surface.commands,
        vec![
            DrawCommand::BeginPath,
            DrawCommand::StrokeStyle(Rgb::new(99, 102, 241).css_rgba(0.06 * 0.5)),
            DrawCommand::LineWidth(0.5),
            DrawCommand::MoveTo { x: 10.0, y: 10.0 },
            DrawCommand::LineTo { x: 70.0, y: 10.0 },
            DrawCommand::Stroke,
        ]
    );
    assert!(surface.stroke_styles()[0].starts_with("rgba(99, 102, 241, 0.03"));
}

#[test]
fn frame_clears_then_draws_in_insertion_order() {
    let mut f = field_with(
        400.0,
        300.0,
        vec![
            particle(10.0, 10.0, 1.0, 0.0),
            particle(300.0, 200.0, 0.0, 1.0),
            particle(20.0, 10.0, 0.0, 0.0),
        ],
    );
    let mut surface = RecordingSurface::new();
    f.frame(&mut surface);

    assert_eq!(
        surface.commands[0],
        DrawCommand::ClearRect {
            x: 0.0,
            y: 0.0,
            w: 400.0,
            h: 300.0
        }
    );
    let arcs: Vec<(f64, f64)> = surface
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(arcs, vec![(11.0, 10.0), (300.0, 201.0), (20.0, 10.0)]);
    assert_eq!(surface.fill_count(), 3);
    // only #0 and #2 are close; lines come after every particle
    assert_eq!(surface.stroke_count(), 1);
    let last_fill = surface
        .commands
        .iter()
        .rposition(|c| *c == DrawCommand::Fill)
        .unwrap();
    let first_stroke = surface
        .commands
        .iter()
        .position(|c| *c == DrawCommand::Stroke)
        .unwrap();
    assert!(last_fill < first_stroke);
}

#[test]
fn particle_fill_uses_own_opacity() {
    let mut surface = RecordingSurface::new();
    let p = Particle {
        opacity: 0.25,
        ..particle(5.0, 6.0, 0.0, 0.0)
    };
    p.draw(&mut surface, Rgb::new(99, 102, 241));
    assert_eq!(
        surface.commands,
        vec![
            DrawCommand::BeginPath,
            DrawCommand::Arc {
                x: 5.0,
                y: 6.0,
                radius: 1.0,
                start: 0.0,
                end: std::f64::consts::TAU
            },
            DrawCommand::FillStyle("rgba(99, 102, 241, 0.25)".to_string()),
            DrawCommand::Fill,
        ]
    );
}

#[test]
fn narrow_surface_gives_blank_frames() {
    let mut f = seeded_field(10.0, 600.0, 1);
    assert!(f.is_empty());
    let mut surface = RecordingSurface::new();
    for _ in 0..10 {
        f.frame(&mut surface);
    }
    assert_eq!(surface.fill_count(), 0);
    assert_eq!(surface.stroke_count(), 0);
    assert!(surface
        .commands
        .iter()
        .all(|c| matches!(c, DrawCommand::ClearRect { .. })));
}

#[test]
fn end_to_end_widths() {
    for (w, n) in [(1200.0, 80), (150.0, 10), (10.0, 0)] {
        let f = seeded_field(w, 700.0, 8);
        assert_eq!(f.len(), n, "width {w}");
    }
}

struct CountTo {
    seen: Vec<f64>,
    limit: usize,
}

impl FrameTask for CountTo {
    fn tick(&mut self, timestamp_ms: f64) -> Flow {
        self.seen.push(timestamp_ms);
        if self.seen.len() >= self.limit {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

#[test]
fn run_frames_stops_when_task_finishes() {
    let mut task = CountTo {
        seen: Vec::new(),
        limit: 5,
    };
    let ran = run_frames(&mut task, &LoopHandle::new(), 100, 1000.0, 16.0);
    assert_eq!(ran, 5);
    assert_eq!(task.seen, vec![1000.0, 1016.0, 1032.0, 1048.0, 1064.0]);
}

#[test]
fn run_frames_respects_bound_and_handle() {
    let mut task = CountTo {
        seen: Vec::new(),
        limit: usize::MAX,
    };
    let handle = LoopHandle::new();
    assert_eq!(run_frames(&mut task, &handle, 7, 0.0, 16.0), 7);

    let other = handle.clone();
    other.stop();
    assert!(handle.is_stopped());
    assert_eq!(run_frames(&mut task, &handle, 7, 0.0, 16.0), 0);
    assert_eq!(task.seen.len(), 7);
}

#[test]
fn field_animation_runs_bounded_frames() {
    let field = seeded_field(600.0, 400.0, 77);
    let n = field.len();
    let mut anim = FieldAnimation::new(field, RecordingSurface::new());
    let ran = run_frames(&mut anim, &LoopHandle::new(), 30, 0.0, 16.7);
    assert_eq!(ran, 30);
    assert_eq!(anim.surface.fill_count(), 30 * n);
    let clears = anim
        .surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
        .count();
    assert_eq!(clears, 30);
}

#[test]
fn split_update_and_draw_match_a_full_frame() {
    let mut a = seeded_field(700.0, 500.0, 31);
    let mut b = a.clone();

    let mut full = RecordingSurface::new();
    a.frame(&mut full);

    let mut split = RecordingSurface::new();
    split.clear_rect(0.0, 0.0, b.width, b.height);
    b.update();
    b.draw(&mut split);
    b.connect_particles(&mut split);

    assert_eq!(a.particles, b.particles);
    assert_eq!(full.commands, split.commands);
}

#[test]
fn init_adopts_surface_size_for_later_frames() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut f = ParticleField::new(FieldConfig::default());
    f.init_particles(1200.0, 800.0, &mut rng);
    assert_eq!((f.width, f.height), (1200.0, 800.0));

    // keep every particle well inside so no frame reaches an edge
    for p in &mut f.particles {
        p.pos.x = p.pos.x.clamp(10.0, 1190.0);
        p.pos.y = p.pos.y.clamp(10.0, 790.0);
    }
    let before: Vec<DVec2> = f.particles.iter().map(|p| p.vel).collect();

    let mut surface = RecordingSurface::new();
    f.frame(&mut surface);
    assert_eq!(
        surface.commands[0],
        DrawCommand::ClearRect {
            x: 0.0,
            y: 0.0,
            w: 1200.0,
            h: 800.0
        }
    );
    let after: Vec<DVec2> = f.particles.iter().map(|p| p.vel).collect();
    assert_eq!(before, after);
}
