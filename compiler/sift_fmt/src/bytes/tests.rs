use pretty_assertions::assert_eq;

use super::*;

const SAMPLE: [u8; 3] = [0x01, 0x02, 0x0A];

#[test]
fn packed() {
    assert_eq!(render_bytes(&SAMPLE, ByteFormat::Packed), "x01020A");
}

#[test]
fn spaced() {
    assert_eq!(render_bytes(&SAMPLE, ByteFormat::Spaced), "x01 x02 x0A");
}

#[test]
fn little_endian() {
    assert_eq!(render_bytes(&SAMPLE, ByteFormat::LittleEndian), "655873");
}

#[test]
fn big_endian() {
    assert_eq!(render_bytes(&SAMPLE, ByteFormat::BigEndian), "66058");
}

#[test]
fn single_byte() {
    assert_eq!(render_bytes(&[0xFE], ByteFormat::Packed), "xFE");
    assert_eq!(render_bytes(&[0xFE], ByteFormat::Spaced), "xFE");
    assert_eq!(render_bytes(&[0xFE], ByteFormat::BigEndian), "254");
}

#[test]
fn zero_values() {
    assert_eq!(render_bytes(&[0, 0], ByteFormat::BigEndian), "0");
    assert_eq!(render_bytes(&[0, 0], ByteFormat::Packed), "x0000");
}

#[test]
fn empty_buffer() {
    assert_eq!(render_bytes(&[], ByteFormat::Packed), "");
    assert_eq!(render_bytes(&[], ByteFormat::Spaced), "");
    assert_eq!(render_bytes(&[], ByteFormat::LittleEndian), "0");
}

#[test]
fn wider_than_u128() {
    // 2^136
    let mut bytes = vec![0u8; 18];
    bytes[0] = 1;
    assert_eq!(
        render_bytes(&bytes, ByteFormat::BigEndian),
        "87112285931760246646623899502532662132736"
    );
}

#[test]
fn spec_names() {
    for format in [
        ByteFormat::Packed,
        ByteFormat::Spaced,
        ByteFormat::LittleEndian,
        ByteFormat::BigEndian,
    ] {
        assert_eq!(ByteFormat::from_spec(format.spec()), Some(format));
    }
    assert_eq!(ByteFormat::from_spec("x"), None);
    assert_eq!(ByteFormat::from_spec("l"), None);
}
