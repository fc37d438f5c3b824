#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use crate::commands::PlayerCommand;
    use crate::components::BobMotion;
    use crate::enums::GamePhase;
    use crate::events::{FeedbackEvent, HudUpdate};
    use crate::state::FrameSnapshot;
    use crate::types::{GameClock, ViewPose, ViewportRect};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Tap {
                x: 420.0,
                y: 310.0,
                viewport: ViewportRect::new(0.0, 0.0, 1280.0, 720.0),
            },
            PlayerCommand::BurstSpawn { count: 5 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_feedback_event_serde() {
        for event in [FeedbackEvent::HapticPulse, FeedbackEvent::AudioCue] {
            let json = serde_json::to_string(&event).unwrap();
            let back: FeedbackEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, back);
        }
    }

    #[test]
    fn test_hud_update_serde() {
        let hud = HudUpdate {
            score: 7,
            live_targets: 3,
        };
        let json = serde_json::to_string(&hud).unwrap();
        let back: HudUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(hud, back);
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(snapshot.score, back.score);
        assert!(
            json.len() < 512,
            "Empty snapshot should be small, was {} bytes",
            json.len()
        );
    }

    // ---- Viewport normalization ----

    #[test]
    fn test_viewport_to_ndc() {
        let vp = ViewportRect::new(0.0, 0.0, 800.0, 600.0);

        let (cx, cy) = vp.to_ndc(400.0, 300.0);
        assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6, "center maps to origin");

        let (lx, ty) = vp.to_ndc(0.0, 0.0);
        assert!((lx + 1.0).abs() < 1e-6, "left edge is -1");
        assert!((ty - 1.0).abs() < 1e-6, "top edge is +1 (Y flipped)");

        let (rx, by) = vp.to_ndc(800.0, 600.0);
        assert!((rx - 1.0).abs() < 1e-6);
        assert!((by + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_viewport_with_offset_origin() {
        let vp = ViewportRect::new(100.0, 50.0, 200.0, 100.0);
        let (cx, cy) = vp.to_ndc(200.0, 100.0);
        assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6);
        assert!((vp.aspect() - 2.0).abs() < 1e-6);
    }

    // ---- Pose basis ----

    #[test]
    fn test_pose_identity_basis() {
        let pose = ViewPose::default();
        assert!((pose.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((pose.right() - Vec3::X).length() < 1e-6);
        assert!((pose.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_horizontal_basis_flattens_pitch() {
        // Look 45 degrees downward: the horizontal basis must stay in the
        // ground plane and keep unit length.
        let pose = ViewPose::new(
            Vec3::new(0.0, 1.6, 0.0),
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
        );
        let (right, forward) = pose.horizontal_basis();
        assert!(forward.y.abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_horizontal_basis_straight_down_fallback() {
        let pose = ViewPose::new(
            Vec3::ZERO,
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        );
        let (_, forward) = pose.horizontal_basis();
        assert!((forward - Vec3::NEG_Z).length() < 1e-4);
    }

    // ---- Game clock ----

    #[test]
    fn test_clock_first_frame_has_zero_elapsed() {
        let mut clock = GameClock::default();
        assert_eq!(clock.advance(100.0), 0.0);
        assert!((clock.advance(100.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clock_pause_freezes_game_time() {
        let mut clock = GameClock::default();
        clock.advance(0.0);
        clock.advance(2.0);
        clock.pause();
        assert!(clock.is_paused());

        // Wall clock marches on, game time does not.
        assert_eq!(clock.advance(5.0), 0.0);
        assert_eq!(clock.advance(9.0), 0.0);
        assert!((clock.game_time() - 2.0).abs() < 1e-12);

        clock.resume();
        clock.advance(10.0);
        assert!((clock.game_time() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_clock_double_pause_is_noop() {
        let mut clock = GameClock::default();
        clock.advance(1.0);
        clock.pause();
        clock.advance(4.0);
        clock.pause();
        clock.resume();
        assert!((clock.game_time() - 1.0).abs() < 1e-12);
    }

    // ---- Bob function ----

    #[test]
    fn test_bob_height_is_pure_in_absolute_time() {
        let bob = BobMotion {
            base_height: 1.5,
            amplitude: 0.06,
            frequency_hz: 0.7,
            phase: 1.1,
        };
        // The same absolute time always yields the same height, no matter
        // how many intermediate samples were taken.
        let direct = bob.height_at(4.8);
        let mut t = 0.0;
        while t < 4.8 - 1e-9 {
            let _ = bob.height_at(t);
            t += 0.016;
        }
        assert_eq!(bob.height_at(4.8), direct);
    }

    #[test]
    fn test_bob_height_oscillates_around_base() {
        let bob = BobMotion {
            base_height: 1.2,
            amplitude: 0.05,
            frequency_hz: 0.5,
            phase: 0.0,
        };
        assert!((bob.height_at(0.0) - 1.2).abs() < 1e-6);
        // Quarter period of a 0.5Hz wave: peak of the sine.
        assert!((bob.height_at(0.5) - 1.25).abs() < 1e-6);
        assert!((bob.height_at(1.5) - 1.15).abs() < 1e-6);
    }

    #[test]
    fn test_game_phase_default_running() {
        assert_eq!(GamePhase::default(), GamePhase::Running);
    }
}
