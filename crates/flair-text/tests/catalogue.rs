//! Integration tests for the built-in catalogue.

use std::cell::RefCell;
use std::rc::Rc;

use flair_style::codec;
use flair_text::kinds::{Bold, Italic};
use flair_text::prelude::*;
use flair_text::register_builtins;

#[test]
fn stored_styles_survive_an_unknown_kind() {
    register_builtins();
    let json = r#"{
        "flair.bold": ["o", true],
        "flair.font-size": ["o", 21.0],
        "flair.text.color": ["o", {"rgba": [1.0, 0.0, 0.0, 1.0]}],
        "flair.text.shadow": ["o", {"radius": 3}],
        "flair.font-family": ["i"]
    }"#;

    let style = codec::from_json_str(json).unwrap();
    assert_eq!(style.len(), 4);
    assert!(style.bold());
    assert_eq!(style.font_size(), 21.0);
    assert_eq!(style.text_color(), Color::rgba(1.0, 0.0, 0.0, 1.0));
    assert_eq!(style.state(&flair_text::kinds::FontFamily), ValueState::Initial);
}

#[test]
fn document_and_paragraph_cascade() {
    register_builtins();
    let document = StyleMap::new()
        .with_font_family("Avenir".to_string())
        .with_alignment(TextAlignment::Justified);
    let heading = StyleMap::new().with_bold(true).with_font_size(24.0);

    let effective = cascade([&document, &heading]);
    let request = FontRequest::from_style(&effective);
    assert_eq!(request.family, "Avenir");
    assert_eq!(request.weight, FontWeight::MEDIUM);
    assert_eq!(request.size, 24.0);
    assert_eq!(
        ParagraphStyle::from_style(&effective).alignment,
        TextAlignment::Justified
    );
}

#[test]
fn requests_snap_to_installed_faces() {
    let faces = [
        AvailableFace::new("Avenir", "Book"),
        AvailableFace::new("Avenir", "Heavy").with_weight(FontWeight::HEAVY),
        AvailableFace::new("Avenir", "Oblique").with_angle(FontAngle::ITALIC),
    ];
    let style = StyleMap::new()
        .with_font_family("Avenir".to_string())
        .with_bold(true)
        .with_font_weight(FontWeight::BOLD);

    let snapped = FontRequest::from_style(&style).snap(&faces);
    assert_eq!(snapped.weight, FontWeight::HEAVY);
    assert_eq!(snapped.angle, FontAngle::UPRIGHT);
}

#[test]
fn toggling_bold_across_runs() {
    register_builtins();
    let text = Rc::new(RefCell::new(StyledText::new("one two three")));
    text.borrow_mut()
        .set_style(&StyleMap::new().with_italic(true), &[4..7]);

    let ranges = vec![0..3, 4..7];
    let target = text.clone();
    let edited = ranges.clone();
    let selection = text.borrow().selection(&ranges, move |proposed, operation| {
        target.borrow_mut().merge_style(&proposed, operation, &edited);
    });
    assert_eq!(selection.cardinality(&Bold), Cardinality::Single(false));
    assert!(selection.cardinality(&Italic).is_mixed());

    selection.update(&Bold, true);
    let styles = text.borrow().styles_in(&ranges);
    assert!(styles.iter().all(|style| style.bold()));
    assert!(!text.borrow().styles_in(&[3..4])[0].bold());

    let selection = text.borrow().selection(&ranges, |_, _| {});
    assert_eq!(selection.cardinality(&Bold), Cardinality::Single(true));
}
