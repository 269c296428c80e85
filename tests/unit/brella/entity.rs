use super::*;
use crate::color::range::ChannelRange;
use crate::foundation::random::SequenceRandom;
use crate::surface::record::{DrawCmd, RecordingSurface};

fn brella(envelope: Envelope) -> Brella {
    Brella::new(
        Vector2::new(100.0, 50.0),
        200.0,
        6,
        Hsl::new(0.0, 100.0, 50.0),
        0.25,
        envelope,
    )
}

#[test]
fn render_draws_canopy_ribs_cap_in_order_then_resets() {
    let mut b = brella(Envelope::new(2, 3));
    let mut s = RecordingSurface::new(400, 300);
    b.render(&mut s, 0.01); // frame 0, scale 0
    b.render(&mut s, 0.01); // frame 1
    let cmds = s.take_cmds();
    let frame1 = &cmds[cmds.len() / 2..];
    assert_eq!(frame1.len(), 5);

    let local = Affine::translate((100.0, 50.0)) * Affine::rotate(0.26);
    let DrawCmd::SetTransform(t) = frame1[0] else {
        panic!("expected transform first");
    };
    for (a, b) in t.as_coeffs().iter().zip(local.as_coeffs()) {
        assert!((a - b).abs() < 1e-9);
    }

    let base = Hsl::new(0.0, 100.0, 50.0);
    assert!(matches!(&frame1[1], DrawCmd::Fill { color, .. } if *color == base.to_rgba8()));
    let DrawCmd::Stroke { style, color, .. } = &frame1[2] else {
        panic!("expected rib stroke");
    };
    assert_eq!(*color, base.darken(5.0).to_rgba8());
    assert_eq!(style.cap, crate::surface::LineCap::Round);
    let scale = (std::f64::consts::PI / 4.0).sin();
    assert!((style.width - 200.0 * 0.01 * scale).abs() < 1e-9);
    assert!(matches!(&frame1[3], DrawCmd::Fill { color, .. } if *color == base.darken(20.0).to_rgba8()));
    assert_eq!(frame1[4], DrawCmd::SetTransform(Affine::IDENTITY));
}

#[test]
fn ends_exactly_at_lifetime_and_then_does_nothing() {
    let env = Envelope::new(2, 3);
    let mut b = brella(env);
    let mut s = RecordingSurface::new(10, 10);
    for i in 0..env.lifetime() {
        assert!(!b.ended(), "ended early at {i}");
        b.render(&mut s, 0.5);
    }
    assert!(b.ended());
    assert_eq!(b.frames(), 7);
    let angle = b.angle();
    assert!((angle - (0.25 + 7.0 * 0.5)).abs() < 1e-12);

    s.take_cmds();
    b.render(&mut s, 0.5);
    assert!(s.cmds().is_empty());
    assert_eq!(b.frames(), 7);
    assert_eq!(b.angle(), angle);
}

#[test]
fn canopy_radius_follows_envelope() {
    let mut b = brella(Envelope::new(0, 4));
    let mut s = RecordingSurface::new(10, 10);
    b.render(&mut s, 0.0);
    let DrawCmd::Fill { path, .. } = &s.cmds()[1] else {
        panic!("expected canopy fill");
    };
    let kurbo::PathEl::MoveTo(p) = path.elements()[0] else {
        panic!("expected move_to");
    };
    assert_eq!(p, kurbo::Point::new(0.0, 100.0));
}

#[test]
fn sample_draws_color_then_angle() {
    let palette = Palette {
        hue: ChannelRange::new(0.0, 360.0),
        saturation: ChannelRange::fixed(90.0),
        lightness: ChannelRange::new(40.0, 60.0),
    };
    let mut rng = SequenceRandom::new(vec![0.5, 0.5, 0.25]);
    let b = Brella::sample(
        Vector2::ZERO,
        10.0,
        2,
        &palette,
        Envelope::new(1, 1),
        &mut rng,
    );
    assert_eq!(b.color(), Hsl::new(180.0, 90.0, 50.0));
    assert!((b.angle() - 0.25 * TAU).abs() < 1e-12);
    assert_eq!(b.sides(), 3);
    assert_eq!(rng.draws(), 3);
}
