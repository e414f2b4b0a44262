//! Reader and writer for the binary `starMap.data` neighborhood catalog.
//!
//! The file is a bare sequence of records with no header and no record count.
//! Each record is laid out big-endian as:
//!
//! ```text
//! [u32 id][u8 name_len][name_len bytes: '|'-separated names, NUL padded]
//! [f64 x][f64 y][f64 z][f32 absolute magnitude][u8 r][u8 g][u8 b]
//! ```
//!
//! Positions are in parsecs. End of data is only legal on a record boundary;
//! any shorter tail is reported as a truncated record.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, info};

use crate::error::{DecodeError, EncodeError};
use crate::{Rgb, StarCatalog, StarRecord, Vector3};

/// Separator between alternate designations in the name field.
pub const NAME_SEPARATOR: &str = "|";

/// Bytes following the name field: three f64, one f32, three u8.
const TAIL_LEN: usize = 3 * 8 + 4 + 3;

/// Cursor over the raw catalog bytes that reports which field ran short.
struct RecordReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> RecordReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, field: &'static str, needed: usize) -> Result<&'a [u8], DecodeError> {
        let available = self.remaining();
        if available < needed {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                field,
                needed,
                available,
            });
        }
        let bytes = &self.data[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(bytes)
    }

    fn read_record(&mut self) -> Result<StarRecord, DecodeError> {
        let head = self.take("id and name length", 5)?;
        let id = BigEndian::read_u32(&head[0..4]);
        let name_len = head[4] as usize;

        let name_bytes = self.take("names", name_len)?;
        let names = decode_names(id, name_bytes)?;

        let tail = self.take("position, magnitude and color", TAIL_LEN)?;
        let position = Vector3::new(
            BigEndian::read_f64(&tail[0..8]),
            BigEndian::read_f64(&tail[8..16]),
            BigEndian::read_f64(&tail[16..24]),
        );
        if !position.iter().all(|c| c.is_finite()) {
            return Err(DecodeError::NonFinitePosition { id });
        }
        let magnitude = BigEndian::read_f32(&tail[24..28]);
        let color = Rgb::new(tail[28], tail[29], tail[30]);

        Ok(StarRecord {
            id,
            names,
            position,
            magnitude,
            color,
        })
    }
}

fn decode_names(id: u32, bytes: &[u8]) -> Result<Vec<String>, DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidName { id })?;
    Ok(text
        .trim_end_matches('\0')
        .split(NAME_SEPARATOR)
        .map(str::to_string)
        .collect())
}

/// Names must survive the join, NUL trim and split of a decode unchanged.
fn check_names(star: &StarRecord) -> Result<(), EncodeError> {
    if star.names.is_empty() {
        return Err(EncodeError::NoNames { id: star.id });
    }
    let bad = star
        .names
        .iter()
        .find(|name| name.contains(NAME_SEPARATOR) || name.ends_with('\0'));
    match bad {
        Some(name) => Err(EncodeError::UnencodableName {
            id: star.id,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

/// Decode a complete catalog from its raw bytes.
///
/// Fails on the first truncated record, duplicate id, non-UTF-8 name field or
/// non-finite position; no partial catalog is returned.
pub fn decode_catalog(data: &[u8]) -> Result<StarCatalog, DecodeError> {
    let mut reader = RecordReader::new(data);
    let mut catalog = StarCatalog::new();
    while reader.remaining() > 0 {
        let star = reader.read_record()?;
        catalog.insert(star)?;
    }
    debug!("Decoded {} stars from {} bytes", catalog.len(), data.len());
    Ok(catalog)
}

/// Read and decode a catalog file.
pub fn load_catalog_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<StarCatalog> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read star catalog {}", path.display()))?;
    let catalog = decode_catalog(&data)
        .with_context(|| format!("Corrupt star catalog {}", path.display()))?;
    info!("Loaded {} stars from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Write every star of `catalog` to `out` in ascending id order.
pub fn write_catalog<W: Write>(out: &mut W, catalog: &StarCatalog) -> anyhow::Result<()> {
    let bytes = encode_catalog(catalog)?;
    out.write_all(&bytes)?;
    debug!("Wrote {} stars ({} bytes)", catalog.len(), bytes.len());
    Ok(())
}

/// Encode a catalog into a fresh byte buffer.
///
/// Names are joined with `|` and written without padding. A star is
/// rejected when its names would not decode back to the same list.
pub fn encode_catalog(catalog: &StarCatalog) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    for star in catalog {
        check_names(star)?;
        let names = star.names.join(NAME_SEPARATOR);
        let name_len = u8::try_from(names.len()).map_err(|_| EncodeError::NameTooLong {
            id: star.id,
            len: names.len(),
        })?;

        let mut head = [0u8; 5];
        BigEndian::write_u32(&mut head[0..4], star.id);
        head[4] = name_len;
        buf.extend_from_slice(&head);
        buf.extend_from_slice(names.as_bytes());

        let mut tail = [0u8; TAIL_LEN];
        BigEndian::write_f64(&mut tail[0..8], star.position.x);
        BigEndian::write_f64(&mut tail[8..16], star.position.y);
        BigEndian::write_f64(&mut tail[16..24], star.position.z);
        BigEndian::write_f32(&mut tail[24..28], star.magnitude);
        tail[28] = star.color.r;
        tail[29] = star.color.g;
        tail[30] = star.color.b;
        buf.extend_from_slice(&tail);
    }
    Ok(buf)
}
