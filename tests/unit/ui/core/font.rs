use super::*;

#[test]
fn default_book_knows_monospace_faces() {
    let book = FontBook::default();
    assert!(book.contains(DEFAULT_FACE));
    assert!(book.contains("monospace"));

    let font = book.load(DEFAULT_FACE, 10.0).unwrap();
    assert_eq!(font.face(), DEFAULT_FACE);
    assert!((font.advance() - 6.0).abs() < 1e-9);
    assert!((font.height() - 12.0).abs() < 1e-9);
}

#[test]
fn measure_uses_display_columns() {
    let font = FontBook::default().load("monospace", 10.0).unwrap();
    assert!((font.measure("abcd") - 24.0).abs() < 1e-9);
    // Wide glyphs take two columns.
    assert!((font.measure("漢") - 12.0).abs() < 1e-9);
    assert_eq!(font.measure(""), 0.0);
}

#[test]
fn load_rejects_unknown_faces_and_bad_sizes() {
    let book = FontBook::default();
    assert_eq!(
        book.load("Comic Sans", 12.0),
        Err(FontError::UnknownFace("Comic Sans".to_string()))
    );
    assert_eq!(
        book.load(DEFAULT_FACE, 0.0),
        Err(FontError::InvalidSize(0.0))
    );
    assert!(book.load(DEFAULT_FACE, f64::NAN).is_err());
}
