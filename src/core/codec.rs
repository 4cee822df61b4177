// This file implements the binary wire format for the store file
// Every number is fixed-width little-endian, pinned here once and used for
// every field: text is a u64 byte length followed by the raw UTF-8 bytes,
// price is an 8-byte IEEE-754 double, the integer extras are 4-byte i32
//
// One record on disk is:
//   <u64 tag len><tag bytes><u64 name len><name bytes><f64 price><extra field>
// Records sit back to back with no separators - the only way to find the next
// record boundary is to fully decode the previous record

use crate::core::item::{Item, TAG_BOOK, TAG_CLOTHING, TAG_ELECTRONICS, TAG_GROCERY, TAG_TOY};
use crate::error::{Result, StoreError};
use std::io::{Read, Write};

// --- wire primitives ---

fn write_text<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let len = value.len() as u64;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

fn write_f64<W: Write>(writer: &mut W, value: f64) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

// Reads exactly N bytes or reports which field was cut short
fn read_array<const N: usize, R: Read>(reader: &mut R, field: &str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            StoreError::Truncated(format!("{field}: need {N} bytes"))
        } else {
            StoreError::Io(e.to_string())
        }
    })?;
    Ok(buf)
}

fn read_f64<R: Read>(reader: &mut R, field: &str) -> Result<f64> {
    Ok(f64::from_le_bytes(read_array::<8, R>(reader, field)?))
}

fn read_i32<R: Read>(reader: &mut R, field: &str) -> Result<i32> {
    Ok(i32::from_le_bytes(read_array::<4, R>(reader, field)?))
}

// A corrupt length prefix can claim absurd sizes, so the body is read through
// `take` and checked afterwards instead of pre-allocating the claimed length
fn read_text_body<R: Read>(reader: &mut R, len: u64, field: &str) -> Result<String> {
    let mut buf = Vec::new();
    let got = reader.take(len).read_to_end(&mut buf)?;
    if (got as u64) < len {
        return Err(StoreError::Truncated(format!(
            "{field}: length prefix says {len} bytes, only {got} remain"
        )));
    }
    String::from_utf8(buf).map_err(|_| StoreError::Text(field.to_string()))
}

fn read_text<R: Read>(reader: &mut R, field: &str) -> Result<String> {
    let len = u64::from_le_bytes(read_array::<8, R>(reader, &format!("{field} length"))?);
    read_text_body(reader, len, field)
}

// Reads the tag length prefix in a way that can tell a clean end of stream
// (zero bytes left at a record boundary) apart from a record cut off mid-prefix
fn read_tag<R: Read>(reader: &mut R) -> Result<Option<String>> {
    let mut len_buf = [0u8; 8];
    let mut filled = 0;
    while filled < len_buf.len() {
        match reader.read(&mut len_buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(StoreError::Io(e.to_string())),
        }
    }
    if filled == 0 {
        return Ok(None);
    }
    if filled < len_buf.len() {
        return Err(StoreError::Truncated(format!(
            "tag length: need 8 bytes, only {filled} remain"
        )));
    }
    let len = u64::from_le_bytes(len_buf);
    Ok(Some(read_text_body(reader, len, "tag")?))
}

// --- per-item encode / decode ---

/// Encode one complete record (tag, then fields) to the byte sink.
///
/// Field order per variant is fixed as `name, price, extra` and must stay in
/// lockstep with `decode_item`.
pub fn encode_item<W: Write>(item: &Item, writer: &mut W) -> Result<()> {
    write_text(writer, item.type_tag())?;
    match item {
        Item::Grocery {
            name,
            price,
            expiry,
        } => {
            write_text(writer, name)?;
            write_f64(writer, *price)?;
            write_text(writer, expiry)?;
        }
        Item::Electronics {
            name,
            price,
            warranty_years,
        } => {
            write_text(writer, name)?;
            write_f64(writer, *price)?;
            write_i32(writer, *warranty_years)?;
        }
        Item::Clothing { name, price, size } => {
            write_text(writer, name)?;
            write_f64(writer, *price)?;
            write_text(writer, size)?;
        }
        Item::Book {
            name,
            price,
            author,
        } => {
            write_text(writer, name)?;
            write_f64(writer, *price)?;
            write_text(writer, author)?;
        }
        Item::Toy {
            name,
            price,
            recommended_age,
        } => {
            write_text(writer, name)?;
            write_f64(writer, *price)?;
            write_i32(writer, *recommended_age)?;
        }
    }
    Ok(())
}

// The factory: the tag alone decides which decoder runs. The mapping is a
// closed exhaustive dispatch - adding a sixth kind means extending it here
fn decode_fields<R: Read>(tag: &str, reader: &mut R) -> Result<Item> {
    match tag {
        TAG_GROCERY => Ok(Item::Grocery {
            name: read_text(reader, "name")?,
            price: read_f64(reader, "price")?,
            expiry: read_text(reader, "expiry")?,
        }),
        TAG_ELECTRONICS => Ok(Item::Electronics {
            name: read_text(reader, "name")?,
            price: read_f64(reader, "price")?,
            warranty_years: read_i32(reader, "warranty_years")?,
        }),
        TAG_CLOTHING => Ok(Item::Clothing {
            name: read_text(reader, "name")?,
            price: read_f64(reader, "price")?,
            size: read_text(reader, "size")?,
        }),
        TAG_BOOK => Ok(Item::Book {
            name: read_text(reader, "name")?,
            price: read_f64(reader, "price")?,
            author: read_text(reader, "author")?,
        }),
        TAG_TOY => Ok(Item::Toy {
            name: read_text(reader, "name")?,
            price: read_f64(reader, "price")?,
            recommended_age: read_i32(reader, "recommended_age")?,
        }),
        other => Err(StoreError::UnknownTag(other.to_string())),
    }
}

/// Decode the next record from the byte source.
///
/// Returns `Ok(None)` only on a clean end of stream at a record boundary.
/// A record cut off partway, or a tag naming no known kind, is an error -
/// never conflated with "no more records".
pub fn decode_item<R: Read>(reader: &mut R) -> Result<Option<Item>> {
    let tag = match read_tag(reader)? {
        Some(tag) => tag,
        None => return Ok(None),
    };
    let item = decode_fields(&tag, reader)?;
    Ok(Some(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(item: &Item) -> Item {
        let mut buf = Vec::new();
        encode_item(item, &mut buf).expect("encoding to a Vec should not fail");
        let mut cursor = buf.as_slice();
        let decoded = decode_item(&mut cursor)
            .expect("decoding a freshly encoded record should not fail")
            .expect("one record was written, one should come back");
        // The record must be consumed exactly, leaving nothing behind
        assert!(cursor.is_empty());
        decoded
    }

    #[test]
    fn test_round_trip_every_variant() {
        let items = [
            Item::Grocery {
                name: "Milk".to_string(),
                price: 3.5,
                expiry: "2025-01-01".to_string(),
            },
            Item::Electronics {
                name: "Radio".to_string(),
                price: 45.0,
                warranty_years: 2,
            },
            Item::Clothing {
                name: "Shirt".to_string(),
                price: 20.0,
                size: "M".to_string(),
            },
            Item::Book {
                name: "Dune".to_string(),
                price: 9.99,
                author: "Herbert".to_string(),
            },
            Item::Toy {
                name: "Blocks".to_string(),
                price: 12.0,
                recommended_age: 3,
            },
        ];
        for item in &items {
            assert_eq!(&round_trip(item), item);
        }
    }

    #[test]
    fn test_round_trip_empty_and_negative_fields() {
        let item = Item::Grocery {
            name: String::new(),
            price: -7.25,
            expiry: String::new(),
        };
        assert_eq!(round_trip(&item), item);

        let item = Item::Toy {
            name: "返品".to_string(),
            price: 0.0,
            recommended_age: -1,
        };
        assert_eq!(round_trip(&item), item);
    }

    #[test]
    fn test_record_layout_is_little_endian() {
        let item = Item::Toy {
            name: "ab".to_string(),
            price: 1.0,
            recommended_age: 3,
        };
        let mut buf = Vec::new();
        encode_item(&item, &mut buf).unwrap();

        // u64 LE tag length, tag bytes
        assert_eq!(&buf[0..8], &3u64.to_le_bytes());
        assert_eq!(&buf[8..11], b"Toy");
        // u64 LE name length, name bytes
        assert_eq!(&buf[11..19], &2u64.to_le_bytes());
        assert_eq!(&buf[19..21], b"ab");
        // f64 LE price, i32 LE age
        assert_eq!(&buf[21..29], &1.0f64.to_le_bytes());
        assert_eq!(&buf[29..33], &3i32.to_le_bytes());
        assert_eq!(buf.len(), 33);
    }

    #[test]
    fn test_clean_end_of_stream_is_none() {
        let mut empty: &[u8] = &[];
        assert!(decode_item(&mut empty).unwrap().is_none());
    }

    #[test]
    fn test_unknown_tag_is_an_error_not_eof() {
        let mut buf = Vec::new();
        write_text(&mut buf, "Furniture").unwrap();
        write_text(&mut buf, "Chair").unwrap();
        write_f64(&mut buf, 80.0).unwrap();

        let err = decode_item(&mut buf.as_slice()).unwrap_err();
        match err {
            StoreError::UnknownTag(tag) => assert_eq!(tag, "Furniture"),
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_tag_length_is_truncated_error() {
        // Three stray bytes where an 8-byte length prefix should start
        let mut buf: &[u8] = &[1, 2, 3];
        let err = decode_item(&mut buf).unwrap_err();
        assert!(matches!(err, StoreError::Truncated(_)));
    }

    #[test]
    fn test_text_body_shorter_than_prefix_is_truncated_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&10u64.to_le_bytes());
        buf.extend_from_slice(b"abc");

        let err = decode_item(&mut buf.as_slice()).unwrap_err();
        match err {
            StoreError::Truncated(msg) => assert!(msg.contains("10")),
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    #[test]
    fn test_record_cut_mid_field_is_truncated_error() {
        let item = Item::Electronics {
            name: "Radio".to_string(),
            price: 45.0,
            warranty_years: 2,
        };
        let mut buf = Vec::new();
        encode_item(&item, &mut buf).unwrap();

        // Chop the trailing warranty field in half
        buf.truncate(buf.len() - 2);
        let err = decode_item(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::Truncated(_)));
    }

    #[test]
    fn test_absurd_length_prefix_fails_without_allocating() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&u64::MAX.to_le_bytes());
        buf.extend_from_slice(b"xy");

        let err = decode_item(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::Truncated(_)));
    }

    #[test]
    fn test_non_utf8_text_is_a_text_error() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&2u64.to_le_bytes());
        buf.extend_from_slice(&[0xff, 0xfe]);

        let err = decode_item(&mut buf.as_slice()).unwrap_err();
        assert!(matches!(err, StoreError::Text(_)));
    }
}
