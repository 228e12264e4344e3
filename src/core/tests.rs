#[cfg(test)]
mod tests {
    use crate::core::demo::{DEMO_STEPS, DemoPlayer, PROGRESS_MODULUS};
    use crate::core::motion::{
        backdrop_color, bar_transform, float_transform, frame_group_yaw, frame_transform,
        group_sway, orbit_yaw,
    };
    use crate::core::reveal::{CARD_STAGGER_MS, SectionReveal, stagger_delays};
    use crate::core::scene::{
        FAR_PLANE, NEAR_LIMIT, Particle, ParticleField, ShapeKind, Vec3, VisualElement,
    };

    /// Deterministic stand-in for `Math.random`, cycling a fixed sequence.
    fn sampler(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    // ===== Time-driven animator tests =====

    #[test]
    fn test_float_transform_is_deterministic() {
        let mut rand = sampler(&[0.3, 0.7, 0.1, 0.9, 0.5, 0.2, 0.8, 0.4]);
        let elem = VisualElement::float_shape((12.0, 7.0), &mut rand);

        for t in [0.0, 0.5, 1.0, 17.3, 1000.0] {
            let a = float_transform(&elem, t);
            let b = float_transform(&elem, t);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_float_transform_replay_matches() {
        let mut rand = sampler(&[0.42, 0.13, 0.87, 0.61]);
        let elem = VisualElement::float_shape((10.0, 6.0), &mut rand);

        let times: Vec<f64> = (0..120).map(|f| f as f64 / 60.0).collect();
        let first: Vec<_> = times.iter().map(|&t| float_transform(&elem, t)).collect();
        let second: Vec<_> = times.iter().map(|&t| float_transform(&elem, t)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_float_transform_bobs_around_base() {
        let mut rand = sampler(&[0.5]);
        let elem = VisualElement::float_shape((10.0, 6.0), &mut rand);

        // vertical bob stays within +/-2 of the base position
        for t in (0..200).map(|f| f as f64 * 0.1) {
            let tf = float_transform(&elem, t);
            assert!((tf.position.y - elem.position.y).abs() <= 2.0 + 1e-9);
            assert_eq!(tf.position.x, elem.position.x);
            assert_eq!(tf.position.z, elem.position.z);
        }
    }

    #[test]
    fn test_float_transform_at_zero_keeps_base_rotation() {
        let mut rand = sampler(&[0.25, 0.75]);
        let elem = VisualElement::float_shape((10.0, 6.0), &mut rand);

        let tf = float_transform(&elem, 0.0);
        assert_eq!(tf.rotation, elem.rotation);
        assert_eq!(tf.scale, elem.scale);
    }

    #[test]
    fn test_frame_transform_slots_move_on_distinct_axes() {
        let base = Vec3::new(1.0, 2.0, 3.0);
        let t = 4.2;

        let f0 = frame_transform(0, base, t);
        let f1 = frame_transform(1, base, t);
        let f2 = frame_transform(2, base, t);

        // slot 0 drifts vertically, slot 1 horizontally, slot 2 in depth
        assert_eq!(f0.position.x, base.x);
        assert_ne!(f0.position.y, base.y);
        assert_ne!(f1.position.x, base.x);
        assert_eq!(f1.position.y, base.y);
        assert_eq!(f2.position.x, base.x);
        assert_ne!(f2.position.z, base.z);

        // slots repeat modulo 3
        assert_eq!(frame_transform(3, base, t), f0);
    }

    #[test]
    fn test_sway_and_yaw_are_bounded() {
        for t in (0..500).map(|f| f as f64 * 0.37) {
            assert!(group_sway(t).abs() <= 0.1 + 1e-12);
            assert!(frame_group_yaw(t) >= 0.0);
        }
        assert_eq!(orbit_yaw(0.0), 0.0);
        assert!(orbit_yaw(10.0) > orbit_yaw(5.0));
    }

    #[test]
    fn test_bar_transform_bobs_and_spins() {
        let (y0, s0) = bar_transform(0, 2.0, 1.0);
        let (y1, s1) = bar_transform(1, 2.0, 1.0);

        assert!((y0 - 2.0).abs() <= 0.2 + 1e-12);
        assert!((y1 - 2.0).abs() <= 0.2 + 1e-12);
        // adjacent bars are phase-shifted, not in lockstep
        assert_ne!(y0, y1);
        assert_ne!(s0, s1);
    }

    #[test]
    fn test_backdrop_color_channels_stay_in_range() {
        for t in (0..300).map(|f| f as f64 * 0.7) {
            for (u, v) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (0.25, 0.9)] {
                let rgb = backdrop_color(u, v, t);
                for channel in rgb {
                    assert!((0.0..=1.0).contains(&channel), "channel {channel} at t={t}");
                }
            }
        }
    }

    // ===== Particle field tests =====

    #[test]
    fn test_field_spawn_within_spread() {
        let mut rand = sampler(&[0.0, 0.25, 0.5, 0.75, 0.99]);
        let field = ParticleField::new(40, (12.0, 7.0), 0.5, &mut rand);

        assert_eq!(field.particles().len(), 40);
        for p in field.particles() {
            assert!(p.position.x.abs() <= 12.0 * 2.0);
            assert!(p.position.y.abs() <= 7.0 * 2.0);
            assert!(p.position.z <= -10.0 && p.position.z >= -60.0);
            assert!(p.velocity.z > 0.0);
        }
    }

    #[test]
    fn test_particle_recycled_at_far_plane() {
        let particle = Particle {
            position: Vec3::new(0.0, 0.0, NEAR_LIMIT - 0.1),
            velocity: Vec3::new(0.0, 0.0, 1.0),
        };
        let mut field = ParticleField::with_particles(vec![particle], (12.0, 7.0), 1.0);
        let mut rand = sampler(&[0.5]);

        field.step(0.0, &mut rand);

        let p = field.particles()[0];
        assert_eq!(p.position.z, FAR_PLANE);
    }

    #[test]
    fn test_recycled_particle_does_not_exceed_limit_twice() {
        let particle = Particle {
            position: Vec3::new(0.0, 0.0, NEAR_LIMIT - 0.1),
            velocity: Vec3::new(0.0, 0.0, 1.0),
        };
        let mut field = ParticleField::with_particles(vec![particle], (12.0, 7.0), 1.0);
        let mut rand = sampler(&[0.5]);

        field.step(0.0, &mut rand);
        assert_eq!(field.particles()[0].position.z, FAR_PLANE);

        // the follow-up step advances from the far plane, far below the limit
        field.step(0.016, &mut rand);
        assert!(field.particles()[0].position.z < NEAR_LIMIT);
    }

    #[test]
    fn test_no_step_leaves_a_particle_past_the_limit() {
        let mut rand = sampler(&[0.1, 0.9, 0.3, 0.7, 0.5]);
        let mut field = ParticleField::new(25, (12.0, 7.0), 400.0, &mut rand);

        let mut step_rand = sampler(&[0.6, 0.2, 0.8]);
        for frame in 0..500 {
            field.step(frame as f64 / 60.0, &mut step_rand);
            for p in field.particles() {
                assert!(p.position.z <= NEAR_LIMIT);
            }
        }
    }

    #[test]
    fn test_wraparound_maps_excess_to_opposite_bound() {
        let (w, h) = (5.0, 3.0);
        let particle = Particle {
            position: Vec3::new(w * 2.0 - 0.5, 0.0, -20.0),
            velocity: Vec3::new(1.0, 0.0, 0.0),
        };
        let mut field = ParticleField::with_particles(vec![particle], (w, h), 10.0);
        let mut rand = sampler(&[0.5]);

        field.step(0.0, &mut rand);

        // exceeded +bound, re-enters at exactly -bound
        assert_eq!(field.particles()[0].position.x, -w * 2.0);
    }

    #[test]
    fn test_wraparound_is_symmetric() {
        let (w, h) = (5.0, 3.0);
        let particle = Particle {
            position: Vec3::new(0.0, -h * 2.0 + 0.5, -20.0),
            velocity: Vec3::new(0.0, -1.0, 0.0),
        };
        let mut field = ParticleField::with_particles(vec![particle], (w, h), 10.0);
        let mut rand = sampler(&[0.5]);

        field.step(0.0, &mut rand);

        assert_eq!(field.particles()[0].position.y, h * 2.0);

        // no coordinate is ever left out of range after a step
        let p = field.particles()[0];
        assert!(p.position.x.abs() <= w * 2.0);
        assert!(p.position.y.abs() <= h * 2.0);
    }

    #[test]
    fn test_set_bounds_applies_to_later_steps() {
        let particle = Particle {
            position: Vec3::new(9.5, 0.0, -20.0),
            velocity: Vec3::new(1.0, 0.0, 0.0),
        };
        let mut field = ParticleField::with_particles(vec![particle], (5.0, 3.0), 1.0);
        field.set_bounds((4.0, 3.0));
        let mut rand = sampler(&[0.5]);

        field.step(0.0, &mut rand);

        // wrapped against the updated 4.0-unit bound, not the original
        assert_eq!(field.particles()[0].position.x, -8.0);
        assert_eq!(field.bounds(), (4.0, 3.0));
    }

    #[test]
    fn test_float_shape_kind_split() {
        // eight samples cover position/rotation/scale/speed; the ninth
        // decides the kind, > 0.5 being a cube
        let mut cube_rand = sampler(&[0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.9]);
        let cube = VisualElement::float_shape((10.0, 6.0), &mut cube_rand);
        assert_eq!(cube.kind, ShapeKind::Cube);

        let mut sphere_rand = sampler(&[0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.4, 0.2]);
        let sphere = VisualElement::float_shape((10.0, 6.0), &mut sphere_rand);
        assert_eq!(sphere.kind, ShapeKind::Sphere);

        assert!(cube.scale >= 0.2 && cube.scale <= 0.7);
        assert!(cube.speed >= 0.01 && cube.speed <= 0.03);
    }

    // ===== Scroll reveal tests =====

    #[test]
    fn test_reveal_flag_flips_once() {
        let mut reveal = SectionReveal::new();
        assert!(!reveal.is_visible());

        assert!(reveal.observe(true));
        assert!(reveal.is_visible());

        // re-intersection is ignored
        assert!(!reveal.observe(true));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_reveal_flag_never_resets() {
        let mut reveal = SectionReveal::new();
        reveal.observe(true);

        // leaving and re-entering the viewport keeps the flag set
        assert!(!reveal.observe(false));
        assert!(reveal.is_visible());
        assert!(!reveal.observe(true));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_reveal_ignores_non_intersections() {
        let mut reveal = SectionReveal::new();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_visible());
    }

    #[test]
    fn test_stagger_delays_are_fixed_steps() {
        assert_eq!(stagger_delays(4, CARD_STAGGER_MS), vec![0, 150, 300, 450]);
        assert_eq!(stagger_delays(0, CARD_STAGGER_MS), Vec::<u32>::new());
        assert_eq!(stagger_delays(1, 200), vec![0]);
    }

    // ===== Demo player tests =====

    #[test]
    fn test_demo_step_index_cycles() {
        let mut player = DemoPlayer::new();
        let count = DEMO_STEPS.len();

        let mut seen = Vec::new();
        for _ in 0..(count * 2) {
            player.tick(count);
            seen.push(player.step);
        }
        assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_demo_progress_cycles_mod_101() {
        let mut player = DemoPlayer::new();

        let mut seen = Vec::new();
        for _ in 0..6 {
            player.tick(DEMO_STEPS.len());
            seen.push(player.progress);
        }
        assert_eq!(seen, vec![25, 50, 75, 100, 24, 49]);
        assert!(seen.iter().all(|p| *p < PROGRESS_MODULUS));
    }

    #[test]
    fn test_demo_player_runs_indefinitely() {
        let mut player = DemoPlayer::new();
        for _ in 0..10_000 {
            player.tick(DEMO_STEPS.len());
            assert!(player.step < DEMO_STEPS.len());
            assert!(player.progress < PROGRESS_MODULUS);
        }
    }

    #[test]
    fn test_demo_script_content() {
        assert_eq!(DEMO_STEPS.len(), 4);
        assert_eq!(DEMO_STEPS[0].title, "New Ticket Received");
        assert_eq!(
            DEMO_STEPS[1].status,
            crate::core::demo::StepStatus::Processing
        );
        assert_eq!(DEMO_STEPS[2].status.to_string(), "completed");
    }
}
