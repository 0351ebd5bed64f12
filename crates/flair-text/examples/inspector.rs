//! Style inspector example.
//!
//! Builds a small styled document, prints the font and paragraph attributes of
//! a few ranges, toggles bold through a selection and dumps the stored runs.
//!
//! Run with: cargo run -p flair-text --example inspector

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use flair_style::codec;
use flair_text::kinds::{Bold, Italic};
use flair_text::prelude::*;

fn describe(text: &StyledText, ranges: &[Range<usize>]) {
    for style in text.styles_in(ranges) {
        println!(
            "  {} | {:?} | {}",
            FontRequest::from_style(&style),
            ParagraphStyle::from_style(&style).alignment,
            style.text_color()
        );
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    flair_text::register_builtins();

    let document = StyleMap::new()
        .with_font_family("Avenir".to_string())
        .with_alignment(TextAlignment::Justified);
    let text = Rc::new(RefCell::new(
        StyledText::new("Styles cascade from document to run.").with_document_style(document),
    ));
    text.borrow_mut()
        .set_style(&StyleMap::new().with_italic(true).with_text_color(Color::Indigo), &[0..6]);

    println!("Before:");
    describe(&text.borrow(), &[0..14]);

    let ranges = vec![0..6, 15..23];
    let target = text.clone();
    let edited = ranges.clone();
    let selection = text.borrow().selection(&ranges, move |proposed, operation| {
        target.borrow_mut().merge_style(&proposed, operation, &edited);
    });
    println!("bold: {:?}", selection.cardinality(&Bold).values());
    println!("italic: {:?}", selection.cardinality(&Italic).values());
    selection.update(&Bold, true);

    println!("After bold:");
    describe(&text.borrow(), &ranges);

    println!("Stored runs:");
    for run in text.borrow().runs() {
        match codec::to_json_string(&run.style) {
            Ok(json) => println!("  {:?} {}", run.range, json),
            Err(err) => println!("  {:?} <{}>", run.range, err),
        }
    }
}
