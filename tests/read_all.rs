use pretty_assertions::assert_eq;
use splice_drum::prelude::*;

fn render(bytes: &[u8]) -> String {
    match splice_drum::decode(bytes) {
        Ok(pattern) => pattern.to_string(),
        Err(e) => panic!("{e}"),
    }
}

#[test]
fn read_pattern_1() {
    assert_eq!(
        render(include_bytes!("../test-asset/pattern_1.splice")),
        "Saved with HW Version: 0.808-alpha
Tempo: 120
(0) kick\t|x---|x---|x---|x---|
(1) snare\t|----|x---|----|x---|
(2) clap\t|----|x-x-|----|----|
(3) hh-open\t|--x-|--x-|x-x-|--x-|
(4) hh-close\t|x---|x---|----|x--x|
(5) cowbell\t|----|----|--x-|----|
"
    );
}

#[test]
fn read_pattern_2() {
    assert_eq!(
        render(include_bytes!("../test-asset/pattern_2.splice")),
        "Saved with HW Version: 0.808-alpha
Tempo: 98.4
(0) kick\t|x---|----|x---|----|
(1) snare\t|----|x---|----|x---|
(3) hh-open\t|--x-|--x-|x-x-|--x-|
(5) cowbell\t|----|----|x---|----|
"
    );
}

#[test]
fn read_pattern_5_ignores_bytes_past_payload() {
    let bytes = include_bytes!("../test-asset/pattern_5.splice");
    assert_eq!(
        render(bytes),
        "Saved with HW Version: 0.708-alpha
Tempo: 999
(1) Kick\t|x---|----|x---|----|
(2) HiHat\t|x-x-|x-x-|x-x-|x-x-|
"
    );

    let mut decoder = Decoder::new(&bytes[..]);
    decoder.decode().unwrap();
    let header_and_payload = 14 + 36 + (21 + 4) + (21 + 5);
    assert_eq!(decoder.buffer_position(), header_and_payload);
    assert_eq!(decoder.into_inner().len(), bytes.len() - header_and_payload as usize);
}

#[test]
fn read_pattern_1_truncated() {
    let bytes = include_bytes!("../test-asset/pattern_1_truncated.splice");
    let err = splice_drum::decode(bytes).unwrap_err();

    assert!(err.is_truncated());
    let reader_err = err.reader_error().unwrap();
    assert_eq!(reader_err.position(), 131);
    assert!(matches!(
        reader_err.error_kind(),
        ReaderErrorKind::Truncated {
            field: "track name",
            expected: 7,
            read: 3
        }
    ));

    let partial = err.into_partial().unwrap();
    let names: Vec<_> = partial.tracks().iter().map(Track::name).collect();
    assert_eq!(names, ["kick", "snare", "clap"]);
}

#[test]
fn read_from_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test-asset/pattern_2.splice");
    let pattern = splice_drum::decode_file(path).unwrap();
    assert_eq!(pattern.track_count(), 4);

    let err = splice_drum::decode_file("test-asset/does-not-exist.splice").unwrap_err();
    assert!(matches!(err, DecodeError::Open { .. }));
    assert!(err.reader_error().is_none());
}
