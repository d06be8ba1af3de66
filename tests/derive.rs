#![cfg(all(feature = "derive", feature = "std"))]

use std::io::Cursor;

use sprocket::{ByteOrder, Decode, Decoder};

#[derive(Debug, Default, PartialEq, Decode)]
struct Header {
    magic: [u8; 4],
    version: u16,
    length: u32,
    #[decode(skip)]
    checked: bool,
}

#[derive(Debug, Default, PartialEq, Decode)]
struct Sample {
    time: u32,
    position: [i32; 2],
    altitude: f32,
}

#[derive(Debug, Default, PartialEq, Decode)]
struct Frame {
    header: Header,
    samples: [Sample; 2],
}

static HEADER: [u8; 10] = [b'S', b'P', b'K', b'T', 0, 1, 0, 0, 0, 48];

fn sample(time: u32, lat: i32, long: i32, altitude: f32) -> Vec<u8> {
    [
        &time.to_be_bytes()[..],
        &lat.to_be_bytes()[..],
        &long.to_be_bytes()[..],
        &altitude.to_be_bytes()[..],
    ]
    .concat()
}

#[test]
fn decode_struct() {
    let mut d = Decoder::from_slice(&HEADER, ByteOrder::BigEndian);

    let header = d.decode::<Header>().unwrap();
    assert_eq!(
        header,
        Header {
            magic: *b"SPKT",
            version: 1,
            length: 48,
            checked: false,
        }
    );
    assert!(d.get_ref().remaining().is_empty());
}

#[test]
fn decode_nested_struct() {
    let data = [
        &HEADER[..],
        &sample(10, -5, 7, 1.5)[..],
        &sample(11, -6, 8, -2.25)[..],
    ]
    .concat();

    let mut d = Decoder::from_seeker(Cursor::new(data), ByteOrder::BigEndian);

    let frame: Frame = d.decode().unwrap();
    assert_eq!(frame.header.length, 48);
    assert_eq!(
        frame.samples,
        [
            Sample {
                time: 10,
                position: [-5, 7],
                altitude: 1.5,
            },
            Sample {
                time: 11,
                position: [-6, 8],
                altitude: -2.25,
            },
        ]
    );
    assert_eq!(d.read_u8(), None);
}

#[test]
fn decode_truncated_struct() {
    let mut d = Decoder::from_slice(&HEADER[..8], ByteOrder::BigEndian);

    assert_eq!(d.decode::<Header>(), None);
    // The magic and version were read before the length ran out.
    assert_eq!(d.get_ref().position(), 8);
}

#[test]
fn peek_struct() {
    let mut d = Decoder::from_slice(&HEADER, ByteOrder::BigEndian);

    let peeked = d.peek_decode::<Header>();
    assert_eq!(d.get_ref().position(), 0);
    assert_eq!(peeked, d.decode::<Header>());
}

#[test]
fn decode_little_endian_struct() {
    let data = [
        &10u32.to_le_bytes()[..],
        &(-5i32).to_le_bytes()[..],
        &7i32.to_le_bytes()[..],
        &0.5f32.to_le_bytes()[..],
    ]
    .concat();

    let mut d = Decoder::from_slice(&data, ByteOrder::LittleEndian);

    assert_eq!(
        Sample::decode(&mut d),
        Some(Sample {
            time: 10,
            position: [-5, 7],
            altitude: 0.5,
        })
    );
}
