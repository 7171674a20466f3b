use image::{Rgb, RgbImage};
use vision_eye::{
    Canvas, ClassNames, FrameAnnotator, IdentityPalette, Palette, Rect, ReplaySource, Track,
    TrackSource, VisionPoint,
};

#[derive(Debug, thiserror::Error, PartialEq)]
enum MockError {
    #[error("tracker offline")]
    Tracker,
    #[error("canvas failed on draw {0}")]
    Canvas(usize),
}

impl From<vision_eye::SourceError> for MockError {
    fn from(_: vision_eye::SourceError) -> Self {
        MockError::Tracker
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Box {
        bbox: Rect,
        label: String,
        color: Rgb<u8>,
    },
    Link {
        bbox: Rect,
        vision_point: VisionPoint,
    },
    Emit,
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<Draw>,
    fail_at: Option<usize>,
}

impl RecordingCanvas {
    fn failing_at(call: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_at: Some(call),
        }
    }

    fn record(&mut self, draw: Draw) -> Result<(), MockError> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(MockError::Canvas(self.calls.len()));
        }
        self.calls.push(draw);
        Ok(())
    }

    fn boxes(&self) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Box { .. }))
            .collect()
    }

    fn links(&self) -> Vec<VisionPoint> {
        self.calls
            .iter()
            .filter_map(|d| match d {
                Draw::Link { vision_point, .. } => Some(*vision_point),
                _ => None,
            })
            .collect()
    }

    fn emits(&self) -> usize {
        self.calls.iter().filter(|d| **d == Draw::Emit).count()
    }
}

impl Canvas for RecordingCanvas {
    type Error = MockError;

    fn draw_labeled_box(
        &mut self,
        _frame: &mut RgbImage,
        bbox: &Rect,
        label: &str,
        color: Rgb<u8>,
        _stroke_width: u32,
    ) -> Result<(), Self::Error> {
        self.record(Draw::Box {
            bbox: *bbox,
            label: label.to_string(),
            color,
        })
    }

    fn draw_vision_link(
        &mut self,
        _frame: &mut RgbImage,
        bbox: &Rect,
        vision_point: VisionPoint,
        _stroke_width: u32,
    ) -> Result<(), Self::Error> {
        self.record(Draw::Link {
            bbox: *bbox,
            vision_point,
        })
    }

    fn emit(&mut self, _frame: &RgbImage) -> Result<(), Self::Error> {
        self.record(Draw::Emit)
    }
}

struct OfflineTracker;

impl TrackSource for OfflineTracker {
    type Error = MockError;

    fn tracks(&mut self, _frame: &RgbImage) -> Result<Vec<Track>, Self::Error> {
        Err(MockError::Tracker)
    }
}

fn frame() -> RgbImage {
    RgbImage::new(128, 128)
}

fn two_tracks() -> Vec<Track> {
    vec![
        Track::from_tlbr(0, 5, 10.0, 10.0, 50.0, 50.0),
        Track::from_tlbr(1, 7, 60.0, 60.0, 90.0, 90.0),
    ]
}

fn names() -> ClassNames {
    ["person", "bicycle"].into_iter().collect()
}

#[test]
fn test_two_track_scenario() {
    let source = ReplaySource::new([two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    let result = annotator.annotate::<MockError>(frame()).unwrap();
    assert_eq!(result.total_tracks, 2);

    let palette = IdentityPalette;
    let expected = vec![
        Draw::Box {
            bbox: Rect::from_tlbr(10.0, 10.0, 50.0, 50.0),
            label: "person".into(),
            color: palette.color_for(5),
        },
        Draw::Link {
            bbox: Rect::from_tlbr(10.0, 10.0, 50.0, 50.0),
            vision_point: VisionPoint::new(20, 20),
        },
        Draw::Box {
            bbox: Rect::from_tlbr(60.0, 60.0, 90.0, 90.0),
            label: "bicycle".into(),
            color: palette.color_for(7),
        },
        Draw::Link {
            bbox: Rect::from_tlbr(60.0, 60.0, 90.0, 90.0),
            vision_point: VisionPoint::new(20, 20),
        },
        Draw::Emit,
    ];
    assert_eq!(annotator.canvas().calls, expected);
}

#[test]
fn test_empty_frame_still_emits() {
    let source = ReplaySource::new([Vec::<Track>::new()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    let result = annotator.annotate::<MockError>(frame()).unwrap();
    assert_eq!(result.total_tracks, 0);
    assert!(annotator.canvas().boxes().is_empty());
    assert!(annotator.canvas().links().is_empty());
    assert_eq!(annotator.canvas().calls, vec![Draw::Emit]);
}

#[test]
fn test_order_and_count_follow_source() {
    // Deliberately unsorted ids and duplicate identities.
    let tracks: Vec<Track> = [9u64, 3, 3, 12, 1, 40]
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let x = i as f32 * 10.0;
            Track::from_tlbr(0, *id, x, x, x + 8.0, x + 8.0)
        })
        .collect();
    let source = ReplaySource::new([tracks.clone()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    let result = annotator.annotate::<MockError>(frame()).unwrap();
    assert_eq!(result.total_tracks, tracks.len());

    let canvas = annotator.canvas();
    assert_eq!(canvas.boxes().len(), tracks.len());
    assert_eq!(canvas.links().len(), tracks.len());
    assert_eq!(canvas.emits(), 1);

    let drawn: Vec<Rect> = canvas
        .calls
        .iter()
        .filter_map(|d| match d {
            Draw::Box { bbox, .. } => Some(*bbox),
            _ => None,
        })
        .collect();
    let expected: Vec<Rect> = tracks.iter().map(|t| t.bbox).collect();
    assert_eq!(drawn, expected);
    // Emit comes last.
    assert_eq!(canvas.calls.last(), Some(&Draw::Emit));
}

#[test]
fn test_identical_input_gives_identical_draws() {
    let source = ReplaySource::new([two_tracks(), two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    annotator.annotate::<MockError>(frame()).unwrap();
    annotator.annotate::<MockError>(frame()).unwrap();

    let calls = &annotator.canvas().calls;
    let (first, second) = calls.split_at(calls.len() / 2);
    assert_eq!(first, second);
}

#[test]
fn test_color_follows_track_identity() {
    let frames = vec![
        vec![
            Track::from_tlbr(0, 42, 0.0, 0.0, 10.0, 10.0),
            Track::from_tlbr(1, 42, 50.0, 50.0, 70.0, 70.0),
        ],
        vec![Track::from_tlbr(1, 42, 80.0, 10.0, 90.0, 30.0)],
    ];
    let mut annotator =
        FrameAnnotator::new(ReplaySource::new(frames), RecordingCanvas::default(), names());
    annotator.annotate::<MockError>(frame()).unwrap();
    annotator.annotate::<MockError>(frame()).unwrap();

    let colors: Vec<Rgb<u8>> = annotator
        .canvas()
        .calls
        .iter()
        .filter_map(|d| match d {
            Draw::Box { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 3);
    assert!(colors.iter().all(|c| *c == IdentityPalette.color_for(42)));
}

#[test]
fn test_custom_palette_is_keyed_by_track_id() {
    let source = ReplaySource::new([two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names())
        .with_palette(|id: u64| Rgb([id as u8, 0, 0]));

    annotator.annotate::<MockError>(frame()).unwrap();

    let colors: Vec<Rgb<u8>> = annotator
        .canvas()
        .calls
        .iter()
        .filter_map(|d| match d {
            Draw::Box { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec![Rgb([5, 0, 0]), Rgb([7, 0, 0])]);
}

#[test]
fn test_set_vision_point_applies_to_next_frame() {
    let single = vec![Track::from_tlbr(0, 1, 30.0, 30.0, 60.0, 60.0)];
    let source = ReplaySource::new([single.clone(), single]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    annotator.annotate::<MockError>(frame()).unwrap();
    annotator.set_vision_point((100, 100));
    let result = annotator.annotate::<MockError>(frame()).unwrap();

    assert_eq!(result.total_tracks, 1);
    assert_eq!(
        annotator.canvas().links(),
        vec![VisionPoint::new(20, 20), VisionPoint::new(100, 100)]
    );
}

#[test]
fn test_off_canvas_vision_point_is_accepted() {
    let source = ReplaySource::new([two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());
    annotator.set_vision_point((-500, 10_000));

    annotator.annotate::<MockError>(frame()).unwrap();
    assert_eq!(
        annotator.canvas().links(),
        vec![VisionPoint::new(-500, 10_000); 2]
    );
}

#[test]
fn test_unknown_class_uses_numeric_label() {
    let source = ReplaySource::new([vec![Track::from_tlbr(9, 1, 0.0, 0.0, 4.0, 4.0)]]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());
    annotator.annotate::<MockError>(frame()).unwrap();

    match &annotator.canvas().calls[0] {
        Draw::Box { label, .. } => assert_eq!(label, "9"),
        other => panic!("expected a box draw, got {other:?}"),
    }
}

#[test]
fn test_tracker_error_propagates_before_drawing() {
    let mut annotator = FrameAnnotator::new(OfflineTracker, RecordingCanvas::default(), names());

    let err = annotator.annotate::<MockError>(frame()).unwrap_err();
    assert_eq!(err, MockError::Tracker);
    assert!(annotator.canvas().calls.is_empty());
}

#[test]
fn test_canvas_error_aborts_annotation() {
    let source = ReplaySource::new([two_tracks()]);
    // Call 0 is the first box, call 1 its link, call 2 the second box.
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::failing_at(2), names());

    let err = annotator.annotate::<MockError>(frame()).unwrap_err();
    assert_eq!(err, MockError::Canvas(2));
    assert_eq!(annotator.canvas().calls.len(), 2);
    assert_eq!(annotator.canvas().emits(), 0);
}

#[test]
fn test_replay_exhaustion_surfaces_as_error() {
    let source = ReplaySource::new([two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());

    assert!(annotator.annotate::<MockError>(frame()).is_ok());
    assert_eq!(
        annotator.annotate::<MockError>(frame()).unwrap_err(),
        MockError::Tracker
    );
}

#[test]
fn test_quiet_annotator_reports_verbose_flag() {
    let source = ReplaySource::new([two_tracks()]);
    let mut annotator = FrameAnnotator::new(source, RecordingCanvas::default(), names());
    annotator.set_verbose(false);

    let result = annotator.annotate::<MockError>(frame()).unwrap();
    assert!(!result.verbose);
    assert_eq!(result.to_string(), "FrameResult(total_tracks=2)");
}
