use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::new(30, 1).unwrap(),
    }
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    let frame = FrameRGBA::transparent(2, 2);
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());

    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame).unwrap();
    sink.push_frame(FrameIndex(1), &frame).unwrap();
    assert!(!sink.is_ended());
    sink.end().unwrap();

    assert!(sink.is_ended());
    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

type Log = Rc<RefCell<Vec<String>>>;

struct Tracing {
    name: &'static str,
    log: Log,
    fail_end: bool,
}

impl FrameSink for Tracing {
    fn begin(&mut self, _cfg: SinkConfig) -> BrellaResult<()> {
        self.log.borrow_mut().push(format!("{}:begin", self.name));
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRGBA) -> BrellaResult<()> {
        self.log.borrow_mut().push(format!("{}:{}", self.name, idx.0));
        Ok(())
    }

    fn end(&mut self) -> BrellaResult<()> {
        self.log.borrow_mut().push(format!("{}:end", self.name));
        if self.fail_end {
            Err(BrellaError::encode(format!("{} failed", self.name)))
        } else {
            Ok(())
        }
    }
}

#[test]
fn multi_sink_fans_out_and_ends_every_sink() {
    let log: Log = Rc::default();
    let mut multi = MultiSink::new();
    assert!(multi.is_empty());
    for (name, fail_end) in [("a", true), ("b", false)] {
        multi.push(Box::new(Tracing {
            name,
            log: Rc::clone(&log),
            fail_end,
        }));
    }
    assert_eq!(multi.len(), 2);

    multi.begin(cfg()).unwrap();
    multi
        .push_frame(FrameIndex(0), &FrameRGBA::transparent(2, 2))
        .unwrap();
    let err = multi.end().unwrap_err();
    assert!(err.to_string().contains("a failed"));

    assert_eq!(
        *log.borrow(),
        vec!["a:begin", "b:begin", "a:0", "b:0", "a:end", "b:end"]
    );
}
