#![cfg(feature = "std")]

use csv::{ReaderBuilder, StringRecord};
use sprocket::{ByteOrder, Decoder, source::SliceSource};

const PATH: &str = "tests/fixtures/vectors.csv";

#[test]
fn read_vectors() {
    for vector in Vector::load(PATH) {
        let mut d = Decoder::from_slice(&vector.bytes, vector.order);

        assert_eq!(read(&mut d, &vector.ty).as_deref(), Some(&*vector.value), "{vector:?}");
        assert!(d.get_ref().remaining().is_empty(), "{vector:?}");
        assert_eq!(read(&mut d, &vector.ty), None, "{vector:?}");
    }
}

#[test]
fn peek_vectors() {
    for vector in Vector::load(PATH) {
        let mut d = Decoder::from_slice(&vector.bytes, vector.order);

        for _ in 0..3 {
            assert_eq!(peek(&mut d, &vector.ty).as_deref(), Some(&*vector.value), "{vector:?}");
            assert_eq!(d.get_ref().position(), 0, "{vector:?}");
        }
    }
}

#[test]
fn read_truncated_vectors() {
    for vector in Vector::load(PATH) {
        let truncated = &vector.bytes[..vector.bytes.len() - 1];
        let mut d = Decoder::from_slice(truncated, vector.order);

        assert_eq!(read(&mut d, &vector.ty), None, "{vector:?}");
        // The bytes that were there are consumed anyway.
        assert_eq!(d.get_ref().position(), truncated.len(), "{vector:?}");
    }
}

#[derive(Debug)]
struct Vector {
    ty: String,
    order: ByteOrder,
    bytes: Vec<u8>,
    value: String,
}

impl Vector {
    fn load(path: &str) -> Vec<Self> {
        let mut reader = ReaderBuilder::new().from_path(path).unwrap();

        reader
            .records()
            .map(|r| Self::from_record(&r.unwrap()))
            .collect()
    }

    fn from_record(r: &StringRecord) -> Self {
        let order = match &r[1] {
            "le" => ByteOrder::LittleEndian,
            "be" => ByteOrder::BigEndian,
            other => panic!("Unknown byte order {other}."),
        };

        let bytes = (0..r[2].len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&r[2][i..i + 2], 16).unwrap())
            .collect();

        Self {
            ty: r[0].to_string(),
            order,
            bytes,
            value: r[3].to_string(),
        }
    }
}

fn read(d: &mut Decoder<SliceSource>, ty: &str) -> Option<String> {
    match ty {
        "u8" => d.read_u8().map(|v| v.to_string()),
        "u16" => d.read_u16().map(|v| v.to_string()),
        "u32" => d.read_u32().map(|v| v.to_string()),
        "u64" => d.read_u64().map(|v| v.to_string()),
        "i8" => d.read_i8().map(|v| v.to_string()),
        "i16" => d.read_i16().map(|v| v.to_string()),
        "i32" => d.read_i32().map(|v| v.to_string()),
        "i64" => d.read_i64().map(|v| v.to_string()),
        "f32" => d.read_f32().map(|v| v.to_string()),
        "f64" => d.read_f64().map(|v| v.to_string()),
        other => panic!("Unknown type {other}."),
    }
}

fn peek(d: &mut Decoder<SliceSource>, ty: &str) -> Option<String> {
    match ty {
        "u8" => d.peek_u8().map(|v| v.to_string()),
        "u16" => d.peek_u16().map(|v| v.to_string()),
        "u32" => d.peek_u32().map(|v| v.to_string()),
        "u64" => d.peek_u64().map(|v| v.to_string()),
        "i8" => d.peek_i8().map(|v| v.to_string()),
        "i16" => d.peek_i16().map(|v| v.to_string()),
        "i32" => d.peek_i32().map(|v| v.to_string()),
        "i64" => d.peek_i64().map(|v| v.to_string()),
        "f32" => d.peek_f32().map(|v| v.to_string()),
        "f64" => d.peek_f64().map(|v| v.to_string()),
        other => panic!("Unknown type {other}."),
    }
}
