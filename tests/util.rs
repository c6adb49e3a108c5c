use hashbits::util::{fill, fill_range, hex};
use hashbits::Error;

#[test]
fn hex_encodes_uppercase_by_default() {
    assert_eq!(hex::encode(&[0xDE, 0xAD, 0xBE, 0xEF], false), "DEADBEEF");
    assert_eq!(hex::encode(&[0xDE, 0xAD, 0xBE, 0xEF], true), "deadbeef");
    assert_eq!(hex::encode(&[0x00, 0x01, 0x0A, 0xF0], false), "00010AF0");
    assert_eq!(hex::encode(&[], false), "");
}

#[test]
fn hex_decodes_either_case() {
    assert_eq!(hex::decode("DEADBEEF").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(hex::decode("deadbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(hex::decode("dEaDbEeF").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(hex::decode("").unwrap(), Vec::<u8>::new());
}

#[test]
fn hex_round_trips() {
    let data: Vec<u8> = (0..=255).collect();

    assert_eq!(hex::decode(&hex::encode(&data, false)).unwrap(), data);
    assert_eq!(hex::decode(&hex::encode(&data, true)).unwrap(), data);
}

#[test]
fn hex_rejects_odd_length() {
    let err = hex::decode("ABC").unwrap_err();

    assert_eq!(
        err,
        Error::Format {
            reason: "odd number of hex digits",
            position: 3
        }
    );
}

#[test]
fn hex_rejects_invalid_digits_with_their_position() {
    let err = hex::decode("00GG").unwrap_err();
    assert_eq!(
        err,
        Error::Format {
            reason: "invalid hex digit",
            position: 2
        }
    );

    let err = hex::decode("0x12").unwrap_err();
    assert_eq!(
        err,
        Error::Format {
            reason: "invalid hex digit",
            position: 1
        }
    );
}

#[test]
fn fill_covers_the_whole_slice() {
    let mut data = [0u8; 5];
    fill(&mut data, 7);

    assert_eq!(data, [7; 5]);
}

#[test]
fn fill_range_writes_exactly_count_elements() {
    // The reference implementation this was ported from computed its end
    // bound as start + count - 1 and stopped one element short; the
    // intended contract is to fill all `count` elements.
    let mut data = [0u8; 6];
    fill_range(&mut data, 9, 1, 3).unwrap();

    assert_eq!(data, [0, 9, 9, 9, 0, 0]);
}

#[test]
fn fill_range_reaches_the_final_slot() {
    let mut data = [0u8; 4];
    fill_range(&mut data, 1, 2, 2).unwrap();

    assert_eq!(data, [0, 0, 1, 1]);
}

#[test]
fn fill_range_validates_before_writing() {
    let mut data = [0u8; 4];

    let err = fill_range(&mut data, 9, 3, 2).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfRange {
            offset: 3,
            count: 2,
            len: 4
        }
    );
    assert_eq!(data, [0; 4]);

    assert!(fill_range(&mut data, 9, usize::MAX, 1).is_err());
}

#[test]
fn fill_range_accepts_an_empty_range() {
    let mut data = [5u8; 3];
    fill_range(&mut data, 0, 3, 0).unwrap();

    assert_eq!(data, [5; 3]);
}
