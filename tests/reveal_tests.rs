// Host-side tests for eases, scroll triggers, tweens and timelines.

use site_core::reveal::*;

const VH: f32 = 1000.0;
/// Document offset of the element under test.
const DOC_TOP: f32 = 3000.0;

/// Scroll position that puts an element laid out at `DOC_TOP` at `rect_top`
/// in the viewport.
fn scrolled_to(rect_top: f32) -> f32 {
    DOC_TOP - rect_top
}

fn measured(mut reveal: Reveal, height: f32) -> Reveal {
    reveal.refresh(DOC_TOP, height, VH);
    reveal
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn style_of(reveal: &Reveal, target: usize) -> StyleState {
    reveal
        .timeline
        .sample()
        .find(|(i, _)| *i == target)
        .map(|(_, s)| s)
        .expect("target exists")
}

#[test]
fn eases_start_at_zero_and_end_at_one() {
    for name in [
        "none",
        "power1.in",
        "power2.inOut",
        "power3.out",
        "power4.out",
        "power2",
        "back.out",
        "back.out(1.7)",
    ] {
        let ease: Ease = name.parse().unwrap();
        assert!(approx(ease.apply(0.0), 0.0), "{name} at 0");
        assert!(approx(ease.apply(1.0), 1.0), "{name} at 1");
    }
}

#[test]
fn ease_curves_have_expected_shape() {
    let p3: Ease = "power3.out".parse().unwrap();
    assert!(approx(p3.apply(0.5), 0.9375));
    let p2io: Ease = "power2.inOut".parse().unwrap();
    assert!(approx(p2io.apply(0.25), 0.0625));
    assert!(approx(p2io.apply(0.5), 0.5));
    assert!(approx(p2io.apply(0.75), 0.9375));

    let back: Ease = "back.out(1.7)".parse().unwrap();
    assert_eq!(back, Ease::BackOut(1.7));
    assert!(back.apply(0.7) > 1.0, "back.out should overshoot");
}

#[test]
fn unknown_eases_are_rejected() {
    for bad in ["bounce", "power9.out", "power2.sideways", "back.out(x)", "back.out(1.7"] {
        assert!(bad.parse::<Ease>().is_err(), "{bad}");
    }
}

#[test]
fn anchors_parse_keywords_percent_and_px() {
    let a: Anchor = "top 85%".parse().unwrap();
    assert_eq!(a.element, Offset::fraction(0.0));
    assert!(approx(a.viewport.fraction, 0.85));

    let b: Anchor = "bottom 80%".parse().unwrap();
    assert_eq!(b.element, Offset::fraction(1.0));

    let c: Anchor = "center 100px".parse().unwrap();
    assert_eq!(c.element, Offset::fraction(0.5));
    assert_eq!(c.viewport, Offset { fraction: 0.0, px: 100.0 });

    assert!("top".parse::<Anchor>().is_err());
    assert!("top 85% extra".parse::<Anchor>().is_err());
    assert!("middle 50%".parse::<Anchor>().is_err());
}

#[test]
fn toggle_actions_parse_four_words() {
    let t: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(t.enter, ToggleAction::Play);
    assert_eq!(t.leave, ToggleAction::None);
    assert_eq!(t.enter_back, ToggleAction::None);
    assert_eq!(t.leave_back, ToggleAction::Reverse);
    assert_eq!(ToggleActions::default().enter, ToggleAction::Play);
    assert!("play reverse".parse::<ToggleActions>().is_err());
    assert!("play none none rewind".parse::<ToggleActions>().is_err());
}

#[test]
fn trigger_reports_each_crossing_once() {
    let mut trig =
        ScrollTrigger::parse("top 85%", Some("bottom 80%"), Some("play pause resume reverse"))
            .unwrap();
    // element 400px tall; Before while top > 850, After once top <= 400
    let range = trig.refresh(DOC_TOP, 400.0, VH);
    assert_eq!(range.start, scrolled_to(850.0));
    assert_eq!(range.end, scrolled_to(400.0));

    assert!(trig.update(scrolled_to(900.0)).is_empty());
    assert_eq!(trig.zone(), Some(Zone::Before));
    assert_eq!(trig.update(scrolled_to(700.0)).as_slice(), &[ToggleAction::Play]);
    assert!(trig.update(scrolled_to(650.0)).is_empty());
    assert_eq!(trig.update(scrolled_to(300.0)).as_slice(), &[ToggleAction::Pause]);
    assert_eq!(trig.update(scrolled_to(500.0)).as_slice(), &[ToggleAction::Resume]);
    assert_eq!(trig.update(scrolled_to(950.0)).as_slice(), &[ToggleAction::Reverse]);
}

#[test]
fn trigger_jump_fires_both_crossed_callbacks_in_order() {
    let mut trig =
        ScrollTrigger::parse("top 85%", Some("bottom 80%"), Some("play pause resume reverse"))
            .unwrap();
    trig.refresh(DOC_TOP, 400.0, VH);
    assert_eq!(
        trig.update(scrolled_to(-2000.0)).as_slice(),
        &[ToggleAction::Play, ToggleAction::Pause]
    );
    assert_eq!(
        trig.update(scrolled_to(2000.0)).as_slice(),
        &[ToggleAction::Resume, ToggleAction::Reverse]
    );
}

#[test]
fn trigger_waits_for_a_refresh() {
    let mut trig = ScrollTrigger::parse("top 85%", None, None).unwrap();
    assert!(trig.range().is_none());
    assert!(trig.update(1.0e6).is_empty());
    assert_eq!(trig.zone(), None);

    trig.refresh(DOC_TOP, 100.0, VH);
    assert_eq!(trig.update(1.0e6).as_slice(), &[ToggleAction::Play]);
}

#[test]
fn refresh_follows_layout_changes() {
    let mut trig = ScrollTrigger::parse("top 85%", None, None).unwrap();
    trig.refresh(DOC_TOP, 100.0, VH);
    assert!(trig.update(scrolled_to(900.0)).is_empty());

    // content above grew by 100px: same scroll position, element now lower
    trig.refresh(DOC_TOP + 100.0, 100.0, VH);
    assert!(trig.update(scrolled_to(900.0)).is_empty());
    // a taller viewport moves the 85% line down past the element
    trig.refresh(DOC_TOP + 100.0, 100.0, 2.0 * VH);
    assert_eq!(trig.update(scrolled_to(900.0)).as_slice(), &[ToggleAction::Play]);
}

#[test]
fn mask_trigger_ignores_its_own_scale_while_scrolling_down() {
    const HEIGHT: f32 = 600.0;
    let line = 0.85 * VH;
    let mut reveal = measured(Reveal::mask_image().unwrap(), HEIGHT);

    let mut scaled_box_past_line_early = 0;
    for top in (820..=900).rev() {
        let rect_top = top as f32;
        // the box getBoundingClientRect reports while the image is scaled
        let scale = style_of(&reveal, 0).scale.unwrap();
        let visual_top = rect_top + HEIGHT / 2.0 * (1.0 - scale);
        if visual_top <= line && rect_top > line {
            scaled_box_past_line_early += 1;
        }

        // re-measuring mid-animation sees the same layout box
        reveal.refresh(DOC_TOP, HEIGHT, VH);
        reveal.on_scroll(scrolled_to(rect_top));
        reveal.advance(MASK_DURATION);

        assert_eq!(reveal.timeline.direction(), Direction::Forward, "top {top}");
        let expected = if rect_top > line { 0.0 } else { 1.0 };
        assert!(approx(reveal.timeline.progress(), expected), "top {top}");
    }
    assert!(scaled_box_past_line_early > 0);
    assert_eq!(style_of(&reveal, 0).clip, Some(ClipPolygon::FULL));
}

#[test]
fn map_points_trigger_on_the_first_point_top_edge() {
    // 20px point laid out at 1500: its top meets the 90% line at scroll 600,
    // its center would only at 610
    let mut reveal = Reveal::map_points(3).unwrap();
    reveal.refresh(1500.0, 20.0, VH);
    assert!(!reveal.on_scroll(599.0));
    assert!(reveal.on_scroll(601.0));
}

#[test]
fn fade_up_interpolates_opacity_and_offset() {
    let mut reveal = measured(Reveal::fade_up().unwrap(), 200.0);
    let from = style_of(&reveal, 0);
    assert_eq!(from.opacity, Some(0.0));
    assert_eq!(from.y, Some(50.0));

    // below the 85% line: nothing happens
    assert!(!reveal.on_scroll(scrolled_to(900.0)));
    // scrolled to the line
    assert!(reveal.on_scroll(scrolled_to(850.0)));

    assert!(reveal.advance(0.25));
    let mid = style_of(&reveal, 0);
    let (o, y) = (mid.opacity.unwrap(), mid.y.unwrap());
    assert!(o > 0.0 && o < 1.0);
    assert!(y > 0.0 && y < 50.0);
    assert!(approx(o + y / 50.0, 1.0));

    assert!(!reveal.advance(1.0));
    let end = style_of(&reveal, 0);
    assert_eq!(end.opacity, Some(1.0));
    assert_eq!(end.y, Some(0.0));
}

#[test]
fn fade_up_plays_once() {
    let mut reveal = measured(Reveal::fade_up().unwrap(), 200.0);
    reveal.on_scroll(scrolled_to(500.0));
    reveal.advance(2.0);
    // back above the start line and down again
    assert!(!reveal.on_scroll(scrolled_to(950.0)));
    assert_eq!(style_of(&reveal, 0).opacity, Some(1.0));
    assert!(!reveal.on_scroll(scrolled_to(500.0)));
    assert_eq!(style_of(&reveal, 0).opacity, Some(1.0));
}

#[test]
fn content_already_scrolled_past_at_load_is_revealed() {
    let mut reveal = measured(Reveal::fade_up().unwrap(), 200.0);
    assert!(reveal.on_scroll(scrolled_to(-800.0)));
    reveal.advance(1.0);
    assert_eq!(style_of(&reveal, 0).opacity, Some(1.0));
}

#[test]
fn mask_reveal_plays_and_reverses_above_start() {
    let mut reveal = measured(Reveal::mask_image().unwrap(), 400.0);
    let collapsed = style_of(&reveal, 0);
    assert_eq!(collapsed.clip, Some(ClipPolygon::COLLAPSED_BOTTOM));
    assert_eq!(collapsed.scale, Some(1.15));

    assert!(reveal.on_scroll(scrolled_to(700.0)));
    assert!(!reveal.advance(0.9));
    let open = style_of(&reveal, 0);
    assert_eq!(open.clip, Some(ClipPolygon::FULL));
    assert_eq!(open.scale, Some(1.0));

    // past the end line and back: stays open
    assert!(!reveal.on_scroll(scrolled_to(300.0)));
    assert!(!reveal.on_scroll(scrolled_to(700.0)));
    assert_eq!(style_of(&reveal, 0).clip, Some(ClipPolygon::FULL));

    // back above the start line: reverses
    assert!(reveal.on_scroll(scrolled_to(900.0)));
    assert_eq!(reveal.timeline.direction(), Direction::Reverse);
    assert!(!reveal.advance(0.9));
    let closed = style_of(&reveal, 0);
    assert_eq!(closed.clip, Some(ClipPolygon::COLLAPSED_BOTTOM));
    assert_eq!(closed.scale, Some(1.15));

    // and plays again on the way down
    assert!(reveal.on_scroll(scrolled_to(700.0)));
}

#[test]
fn map_points_are_staggered() {
    let mut reveal = measured(Reveal::map_points(5).unwrap(), 20.0);
    assert!(approx(reveal.timeline.duration(), 0.6 + 4.0 * 0.05));
    assert_eq!(reveal.timeline.tracks().len(), 5);

    reveal.on_scroll(scrolled_to(800.0));
    reveal.advance(0.1);
    let first = style_of(&reveal, 0);
    let last = style_of(&reveal, 4);
    assert!(first.scale.unwrap() > 0.0);
    assert_eq!(last.scale, Some(0.0));
    assert_eq!(last.opacity, Some(0.0));

    reveal.advance(1.0);
    for i in 0..5 {
        let s = style_of(&reveal, i);
        assert!(approx(s.scale.unwrap(), 1.0));
        assert!(approx(s.opacity.unwrap(), 1.0));
    }
}

#[test]
fn timeline_jump_actions() {
    let mut tl = Reveal::fade_up().unwrap().timeline;
    assert!(tl.take_dirty(), "from-state renders on creation");
    assert!(!tl.take_dirty());

    tl.apply(ToggleAction::Complete);
    assert!(tl.take_dirty());
    assert!(!tl.is_active());
    assert!(approx(tl.progress(), 1.0));

    tl.apply(ToggleAction::Play);
    assert!(!tl.is_active(), "already at the end");

    tl.apply(ToggleAction::Restart);
    assert!(tl.is_active());
    assert_eq!(tl.time(), 0.0);
    tl.advance(0.4);
    tl.apply(ToggleAction::Pause);
    tl.advance(0.4);
    assert!(approx(tl.time(), 0.4));
    tl.apply(ToggleAction::Resume);
    tl.advance(0.1);
    assert!(approx(tl.time(), 0.5));

    tl.apply(ToggleAction::Reset);
    assert_eq!(tl.time(), 0.0);
    assert!(!tl.is_active());
}

#[test]
fn style_css_writes() {
    let reveal = Reveal::fade_up().unwrap();
    let css = style_of(&reveal, 0).css();
    assert_eq!(css.as_slice(), &[
        ("opacity", "0.000".to_string()),
        ("transform", "translate3d(0px, 50.00px, 0px) scale(1.0000)".to_string()),
    ]);

    let clip = StyleState {
        clip: Some(ClipPolygon::FULL),
        ..StyleState::default()
    };
    assert_eq!(clip.css().as_slice(), &[(
        "clip-path",
        "polygon(0.00% 0.00%, 100.00% 0.00%, 100.00% 100.00%, 0.00% 100.00%)".to_string()
    )]);
}

#[test]
fn clip_polygons_parse_and_interpolate() {
    let from: ClipPolygon = MASK_FROM_CLIP.parse().unwrap();
    let to: ClipPolygon = MASK_TO_CLIP.parse().unwrap();
    assert_eq!(from, ClipPolygon::COLLAPSED_BOTTOM);
    assert_eq!(to, ClipPolygon::FULL);

    let half = from.lerp(&to, 0.5);
    assert!(approx(half.0[0].y, 50.0));
    assert!(approx(half.0[1].y, 50.0));
    assert!(approx(half.0[2].y, 100.0));

    assert!("polygon(0 0, 100% 0)".parse::<ClipPolygon>().is_err());
    assert!("polygon(5 0, 100% 0, 100% 100%, 0 100%)".parse::<ClipPolygon>().is_err());
    assert!("circle(50%)".parse::<ClipPolygon>().is_err());
}
