use crate::color::{InvalidHex, PaletteLine};

#[test]
fn alpha_pair_is_dropped_and_channels_are_right_aligned() {
    let line = PaletteLine::from_hex("FF008000").unwrap();

    assert_eq!((line.red, line.green, line.blue), (255, 0, 128));
    assert_eq!(line.hex, "FF0080");
    assert_eq!(line.to_string(), "255   0 128     #FF0080");
}

#[test]
fn lowercase_hex_is_upper_cased_in_output() {
    let line = PaletteLine::from_hex("1a2b3cff").unwrap();

    assert_eq!(line.to_string(), " 26  43  60     #1A2B3C");
}

#[test]
fn single_digit_channels_are_padded_to_width_three() {
    let line = PaletteLine::from_hex("01020300").unwrap();

    assert_eq!(line.to_string(), "  1   2   3     #010203");
}

#[test]
fn anything_past_six_digits_is_ignored() {
    // Only the first six characters are inspected, even if the tail is junk
    let line = PaletteLine::from_hex("abcdefzz").unwrap();

    assert_eq!(line.to_string(), "171 205 239     #ABCDEF");
}

#[test]
fn non_hex_pair_is_rejected() {
    let err = PaletteLine::from_hex("zz000000").unwrap_err();

    assert_eq!(
        err,
        InvalidHex {
            hex: "zz000000".to_string()
        }
    );
}

#[test]
fn signed_pair_is_rejected() {
    assert!(matches!(
        PaletteLine::from_hex("+f000000"),
        Err(InvalidHex { .. })
    ));
}

#[test]
fn short_hex_is_rejected() {
    assert!(matches!(
        PaletteLine::from_hex("abc"),
        Err(InvalidHex { .. })
    ));
    assert!(matches!(
        PaletteLine::from_hex(""),
        Err(InvalidHex { .. })
    ));
}

#[test]
fn multibyte_input_is_rejected_without_panicking() {
    assert!(matches!(
        PaletteLine::from_hex("aébbccdd"),
        Err(InvalidHex { .. })
    ));
}
