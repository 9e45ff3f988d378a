//! Minimal binary property-list (bplist00) writer.
//!
//! Implements just the subset of the format the brush metadata needs:
//! booleans, integers, reals, strings, byte blobs, archiver UIDs,
//! arrays, and dictionaries. Layout per Apple's published format:
//! an object table of marker-prefixed values, an offset table, and a
//! 32-byte trailer, all offsets and refs big-endian.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::Result;

/// A property-list value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Real(f64),
    String(String),
    Data(Vec<u8>),
    Uid(u64),
    Array(Vec<Value>),
    Dict(Vec<(String, Value)>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

/// Serialize a value tree as a complete bplist00 document.
pub fn to_bytes(root: &Value) -> Result<Vec<u8>> {
    let mut table = Vec::new();
    flatten(root, &mut table);

    let ref_size = byte_width(table.len() as u64);

    let mut out = b"bplist00".to_vec();
    let mut offsets = Vec::with_capacity(table.len());
    for object in &table {
        offsets.push(out.len() as u64);
        write_object(&mut out, object, ref_size)?;
    }

    let offset_table_start = out.len() as u64;
    let offset_size = byte_width(offset_table_start);
    for &offset in &offsets {
        write_sized_be(&mut out, offset, offset_size)?;
    }

    // Trailer: 6 pad bytes, sizes, object count, top object, table offset.
    out.write_all(&[0u8; 6])?;
    out.write_u8(offset_size)?;
    out.write_u8(ref_size)?;
    out.write_u64::<BigEndian>(table.len() as u64)?;
    out.write_u64::<BigEndian>(0)?;
    out.write_u64::<BigEndian>(offset_table_start)?;

    Ok(out)
}

/// A value with children replaced by object-table references.
enum Flat<'a> {
    Bool(bool),
    Int(i64),
    Real(f64),
    String(&'a str),
    Data(&'a [u8]),
    Uid(u64),
    Array(Vec<usize>),
    Dict(Vec<(usize, usize)>),
}

/// Pre-order flatten into the object table; returns the value's index.
fn flatten<'a>(value: &'a Value, table: &mut Vec<Flat<'a>>) -> usize {
    let id = table.len();
    match value {
        Value::Bool(b) => table.push(Flat::Bool(*b)),
        Value::Int(v) => table.push(Flat::Int(*v)),
        Value::Real(v) => table.push(Flat::Real(*v)),
        Value::String(s) => table.push(Flat::String(s)),
        Value::Data(d) => table.push(Flat::Data(d)),
        Value::Uid(u) => table.push(Flat::Uid(*u)),
        Value::Array(items) => {
            table.push(Flat::Array(Vec::new()));
            let refs = items.iter().map(|item| flatten(item, table)).collect();
            table[id] = Flat::Array(refs);
        }
        Value::Dict(entries) => {
            table.push(Flat::Dict(Vec::new()));
            let mut refs = Vec::with_capacity(entries.len());
            for (key, entry) in entries {
                let key_id = table.len();
                table.push(Flat::String(key));
                let entry_id = flatten(entry, table);
                refs.push((key_id, entry_id));
            }
            table[id] = Flat::Dict(refs);
        }
    }
    id
}

fn write_object(out: &mut Vec<u8>, object: &Flat<'_>, ref_size: u8) -> Result<()> {
    match object {
        Flat::Bool(false) => out.write_u8(0x08)?,
        Flat::Bool(true) => out.write_u8(0x09)?,
        Flat::Int(v) => write_int(out, *v)?,
        Flat::Real(v) => {
            out.write_u8(0x23)?;
            out.write_f64::<BigEndian>(*v)?;
        }
        Flat::String(s) => {
            if s.is_ascii() {
                write_marker(out, 0x50, s.len())?;
                out.write_all(s.as_bytes())?;
            } else {
                let units: Vec<u16> = s.encode_utf16().collect();
                write_marker(out, 0x60, units.len())?;
                for unit in units {
                    out.write_u16::<BigEndian>(unit)?;
                }
            }
        }
        Flat::Data(bytes) => {
            write_marker(out, 0x40, bytes.len())?;
            out.write_all(bytes)?;
        }
        Flat::Uid(v) => {
            let width = byte_width(*v);
            out.write_u8(0x80 | (width - 1))?;
            write_sized_be(out, *v, width)?;
        }
        Flat::Array(refs) => {
            write_marker(out, 0xA0, refs.len())?;
            for &r in refs {
                write_sized_be(out, r as u64, ref_size)?;
            }
        }
        Flat::Dict(refs) => {
            write_marker(out, 0xD0, refs.len())?;
            for &(key, _) in refs {
                write_sized_be(out, key as u64, ref_size)?;
            }
            for &(_, entry) in refs {
                write_sized_be(out, entry as u64, ref_size)?;
            }
        }
    }
    Ok(())
}

/// Marker byte with an inline count, spilling to an int object when the
/// count exceeds the nibble.
fn write_marker(out: &mut Vec<u8>, kind: u8, count: usize) -> Result<()> {
    if count < 0x0F {
        out.write_u8(kind | count as u8)?;
    } else {
        out.write_u8(kind | 0x0F)?;
        write_int(out, count as i64)?;
    }
    Ok(())
}

/// Integer object in its smallest power-of-two width. Negative values
/// always take the full eight bytes.
fn write_int(out: &mut Vec<u8>, v: i64) -> Result<()> {
    if v < 0 {
        out.write_u8(0x13)?;
        out.write_i64::<BigEndian>(v)?;
    } else {
        let width = byte_width(v as u64);
        out.write_u8(0x10 | width.trailing_zeros() as u8)?;
        write_sized_be(out, v as u64, width)?;
    }
    Ok(())
}

/// Smallest of 1/2/4/8 bytes that can hold the value.
fn byte_width(v: u64) -> u8 {
    if v <= 0xFF {
        1
    } else if v <= 0xFFFF {
        2
    } else if v <= 0xFFFF_FFFF {
        4
    } else {
        8
    }
}

fn write_sized_be(out: &mut Vec<u8>, v: u64, size: u8) -> Result<()> {
    match size {
        1 => out.write_u8(v as u8)?,
        2 => out.write_u16::<BigEndian>(v as u16)?,
        4 => out.write_u32::<BigEndian>(v as u32)?,
        _ => out.write_u64::<BigEndian>(v)?,
    }
    Ok(())
}
