use super::*;
use crate::encode::sink::InMemorySink;
use crate::transition::config::TransitionConfig;

#[test]
fn progress_line_pads_to_estimate_magnitude() {
    let p = Progress {
        rendered: 7,
        estimated: 105,
    };
    assert_eq!(p.percent(), 6);
    assert_eq!(p.line(), "[006%] Rendered 07 / 105 frames");

    let done = Progress {
        rendered: 9,
        estimated: 9,
    };
    assert_eq!(done.line(), "[100%] Rendered 9 / 9 frames");
}

#[test]
fn run_streams_every_frame_until_transition_ends() {
    let config = TransitionConfig {
        brella_max: 2,
        attack: 1,
        hold: 1,
        ..Default::default()
    };
    let mut transition = Transition::with_seed(config, 21).unwrap();
    let mut runner =
        TransitionRunner::new(Canvas::new(32, 32).unwrap(), Fps::new(30, 1).unwrap()).unwrap();
    let mut sink = InMemorySink::new();
    let mut seen = Vec::new();

    let stats = runner
        .run(&mut transition, &mut sink, |p| seen.push(p))
        .unwrap();

    assert_eq!(stats.frames, 3);
    assert!(!transition.is_active());
    assert!(sink.is_ended());
    assert_eq!(
        sink.config().map(|c| (c.width, c.height)),
        Some((32, 32))
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(
        seen.iter().map(|p| (p.rendered, p.estimated)).collect::<Vec<_>>(),
        vec![(1, 3), (2, 3), (3, 3)]
    );

    // Fully open on the middle frame, collapsed at both ends.
    assert_eq!(sink.frames()[0].1.covered_pixels(), 0);
    assert!(sink.frames()[1].1.covered_pixels() > 0);
    assert_eq!(sink.frames()[2].1.covered_pixels(), 0);
}

struct BrokenPipe {
    pushed: u64,
    ended: bool,
}

impl FrameSink for BrokenPipe {
    fn begin(&mut self, _cfg: SinkConfig) -> BrellaResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &crate::FrameRGBA) -> BrellaResult<()> {
        self.pushed += 1;
        if self.pushed == 2 {
            return Err(BrellaError::encode("Broken pipe"));
        }
        Ok(())
    }

    fn end(&mut self) -> BrellaResult<()> {
        self.ended = true;
        Err(BrellaError::encode("Unknown encoder 'libvpx-vp9'"))
    }
}

#[test]
fn failed_push_still_ends_sink_and_keeps_its_diagnostic() {
    let config = TransitionConfig {
        brella_max: 2,
        attack: 2,
        hold: 2,
        ..Default::default()
    };
    let mut transition = Transition::with_seed(config, 4).unwrap();
    let mut runner =
        TransitionRunner::new(Canvas::new(16, 16).unwrap(), Fps::new(30, 1).unwrap()).unwrap();
    let mut sink = BrokenPipe {
        pushed: 0,
        ended: false,
    };

    let err = runner.run(&mut transition, &mut sink, |_| {}).unwrap_err();
    assert!(sink.ended);
    assert_eq!(sink.pushed, 2);
    let msg = err.to_string();
    assert!(msg.contains("Broken pipe"), "{msg}");
    assert!(msg.contains("libvpx-vp9"), "{msg}");
}

#[test]
fn failed_push_with_clean_shutdown_reports_push_error() {
    let mut transition = Transition::with_seed(TransitionConfig::default(), 4).unwrap();
    let mut runner =
        TransitionRunner::new(Canvas::new(8, 8).unwrap(), Fps::new(30, 1).unwrap()).unwrap();
    // Never started, so the first push fails; ending an in-memory sink always succeeds.
    struct SkipBegin(InMemorySink);
    impl FrameSink for SkipBegin {
        fn begin(&mut self, _cfg: SinkConfig) -> BrellaResult<()> {
            Ok(())
        }
        fn push_frame(&mut self, idx: FrameIndex, frame: &crate::FrameRGBA) -> BrellaResult<()> {
            self.0.push_frame(idx, frame)
        }
        fn end(&mut self) -> BrellaResult<()> {
            self.0.end()
        }
    }
    let mut sink = SkipBegin(InMemorySink::new());
    let err = runner.run(&mut transition, &mut sink, |_| {}).unwrap_err();
    assert!(sink.0.is_ended());
    assert_eq!(err.to_string(), "encode error: in-memory sink not started");
}
