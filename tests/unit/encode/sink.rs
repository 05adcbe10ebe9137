use super::*;
use crate::raster::canvas::Canvas;
use crate::render::frame::FrameCause;

fn frame(w: u32, fill: u8) -> Frame {
    let mut c = Canvas::new(w, w);
    c.set(0, 0, fill);
    Frame::new(c, 50, FrameCause::Initial)
}

#[test]
fn append_keeps_order_and_duplicates() {
    let mut anim = AnimationSink::new();
    assert!(anim.is_empty());
    anim.append(frame(4, 1));
    anim.append(frame(4, 1));
    anim.append(frame(4, 2));
    assert_eq!(anim.len(), 3);
    assert_eq!(anim.frames()[0], anim.frames()[1]);
    assert_eq!(anim.frames()[2].canvas().pixel(0, 0), Some(2));
}

#[test]
fn finalize_streams_frames_with_increasing_indices() {
    let mut anim = AnimationSink::new();
    anim.append(frame(4, 1));
    anim.append(frame(4, 2));

    let mut sink = InMemorySink::new();
    anim.finalize(&mut sink, Palette::default()).unwrap();

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (4, 4));
    assert!(sink.ended());
    let idx: Vec<_> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
    assert_eq!(sink.frames()[1].1, anim.frames()[1]);
}

#[test]
fn finalize_refuses_empty_animation() {
    let mut sink = InMemorySink::new();
    let err = AnimationSink::new()
        .finalize(&mut sink, Palette::default())
        .unwrap_err();
    assert!(matches!(err, TreeframesError::Encode(_)));
    assert!(sink.config().is_none());
}
