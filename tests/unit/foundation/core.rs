use super::*;

#[test]
fn frame_index_clamps_to_end() {
    assert_eq!(FrameIndex(9).clamp_to(FrameIndex(3)), FrameIndex(3));
    assert_eq!(FrameIndex(2).clamp_to(FrameIndex(3)), FrameIndex(2));
    assert_eq!(FrameIndex(0).clamp_to(FrameIndex(0)), FrameIndex::ZERO);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(30, 1).is_ok());
}

#[test]
fn fps_converts_seconds_to_frames() {
    let fps = Fps::new(24, 1).unwrap();
    assert!((fps.secs_to_frames(0.5) - 12.0).abs() < 1e-9);
    assert!((fps.frame_duration_secs() - 1.0 / 24.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames(-1.0), 0.0);
}

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(
        Canvas::new(4, 5).unwrap(),
        Canvas {
            width: 4,
            height: 5
        }
    );
}
