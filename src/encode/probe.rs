//! Read container headers back from encoded bytes.
//!
//! Only the fields needed to identify the container and its pixel size are decoded; pixel data
//! is never touched.

use crate::foundation::error::{SvgagerError, SvgagerResult};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Container family detected from magic bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// PNG.
    Png,
    /// JPEG/JFIF.
    Jpeg,
    /// GIF87a or GIF89a.
    Gif,
    /// RIFF WebP.
    Webp,
}

/// First chunk of a WebP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum WebpChunk {
    /// `VP8 ` lossy bitstream.
    Lossy,
    /// `VP8L` lossless bitstream.
    Lossless,
    /// `VP8X` extended header.
    Extended,
}

/// Header fields recovered from an encoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContainerInfo {
    /// Container family.
    pub kind: ContainerKind,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// WebP chunk variant, `None` for other containers.
    pub webp_chunk: Option<WebpChunk>,
}

/// Identify `bytes` and read its pixel size, checking the container's trailer.
pub fn probe_container(bytes: &[u8]) -> SvgagerResult<ContainerInfo> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        probe_png(bytes)
    } else if bytes.starts_with(&[0xFF, 0xD8]) {
        probe_jpeg(bytes)
    } else if bytes.starts_with(b"GIF89a") || bytes.starts_with(b"GIF87a") {
        probe_gif(bytes)
    } else if bytes.starts_with(b"RIFF") {
        probe_webp(bytes)
    } else {
        Err(SvgagerError::container("unrecognized magic bytes"))
    }
}

fn be_u16(b: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_be_bytes(b.get(at..at + 2)?.try_into().ok()?))
}

fn be_u32(b: &[u8], at: usize) -> Option<u32> {
    Some(u32::from_be_bytes(b.get(at..at + 4)?.try_into().ok()?))
}

fn le_u16(b: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_le_bytes(b.get(at..at + 2)?.try_into().ok()?))
}

fn le_u24(b: &[u8], at: usize) -> Option<u32> {
    let s = b.get(at..at + 3)?;
    Some(u32::from(s[0]) | (u32::from(s[1]) << 8) | (u32::from(s[2]) << 16))
}

fn le_u32(b: &[u8], at: usize) -> Option<u32> {
    Some(u32::from_le_bytes(b.get(at..at + 4)?.try_into().ok()?))
}

fn truncated(what: &str) -> SvgagerError {
    SvgagerError::container(format!("{what} header is truncated"))
}

fn probe_png(b: &[u8]) -> SvgagerResult<ContainerInfo> {
    // signature(8) | length(4) | "IHDR"(4) | width(4) | height(4)
    if b.get(12..16) != Some(b"IHDR".as_slice()) {
        return Err(SvgagerError::container("PNG does not start with an IHDR chunk"));
    }
    let width = be_u32(b, 16).ok_or_else(|| truncated("PNG"))?;
    let height = be_u32(b, 20).ok_or_else(|| truncated("PNG"))?;

    // The IEND chunk is the final 12 bytes: zero length, type, CRC.
    let tail = b
        .len()
        .checked_sub(12)
        .and_then(|at| b.get(at..at + 8))
        .ok_or_else(|| truncated("PNG"))?;
    if tail != [0, 0, 0, 0, b'I', b'E', b'N', b'D'] {
        return Err(SvgagerError::container("PNG does not end with an IEND chunk"));
    }

    Ok(ContainerInfo {
        kind: ContainerKind::Png,
        width,
        height,
        webp_chunk: None,
    })
}

fn probe_jpeg(b: &[u8]) -> SvgagerResult<ContainerInfo> {
    if !b.ends_with(&[0xFF, 0xD9]) {
        return Err(SvgagerError::container("JPEG does not end with an EOI marker"));
    }

    let mut i = 2usize;
    loop {
        if b.get(i) != Some(&0xFF) {
            return Err(SvgagerError::container(format!(
                "JPEG marker expected at offset {i}"
            )));
        }
        // Markers may be preceded by any number of 0xFF fill bytes.
        while b.get(i + 1) == Some(&0xFF) {
            i += 1;
        }
        let marker = *b.get(i + 1).ok_or_else(|| truncated("JPEG"))?;
        match marker {
            // Standalone markers carry no length.
            0x01 | 0xD0..=0xD7 => {
                i += 2;
            }
            0xD9 | 0xDA => {
                return Err(SvgagerError::container(
                    "JPEG has no frame header before scan data",
                ));
            }
            // SOF0..SOF15, excluding DHT (C4), JPG (C8) and DAC (CC).
            0xC0..=0xCF if !matches!(marker, 0xC4 | 0xC8 | 0xCC) => {
                // length(2) | precision(1) | height(2) | width(2)
                let height = be_u16(b, i + 5).ok_or_else(|| truncated("JPEG"))?;
                let width = be_u16(b, i + 7).ok_or_else(|| truncated("JPEG"))?;
                return Ok(ContainerInfo {
                    kind: ContainerKind::Jpeg,
                    width: u32::from(width),
                    height: u32::from(height),
                    webp_chunk: None,
                });
            }
            _ => {
                let len = be_u16(b, i + 2).ok_or_else(|| truncated("JPEG"))?;
                i += 2 + usize::from(len);
            }
        }
    }
}

fn probe_gif(b: &[u8]) -> SvgagerResult<ContainerInfo> {
    let width = le_u16(b, 6).ok_or_else(|| truncated("GIF"))?;
    let height = le_u16(b, 8).ok_or_else(|| truncated("GIF"))?;
    if b.last() != Some(&0x3B) {
        return Err(SvgagerError::container("GIF does not end with a trailer byte"));
    }
    Ok(ContainerInfo {
        kind: ContainerKind::Gif,
        width: u32::from(width),
        height: u32::from(height),
        webp_chunk: None,
    })
}

fn probe_webp(b: &[u8]) -> SvgagerResult<ContainerInfo> {
    let riff_size = le_u32(b, 4).ok_or_else(|| truncated("WebP"))?;
    if b.get(8..12) != Some(b"WEBP".as_slice()) {
        return Err(SvgagerError::container("RIFF file is not WebP"));
    }

    // RIFF payloads are padded to even length; allow that one byte of slack.
    let actual = (b.len() - 8) as u64;
    if u64::from(riff_size).abs_diff(actual) > 1 {
        return Err(SvgagerError::container(format!(
            "RIFF size {riff_size} does not match payload size {actual}"
        )));
    }

    let fourcc = b.get(12..16).ok_or_else(|| truncated("WebP"))?;
    // Chunk payload starts after fourcc(4) and chunk size(4).
    let p = 20usize;
    let (chunk, width, height) = match fourcc {
        b"VP8 " => {
            // frame tag(3) | start code 9D 01 2A (3) | 14-bit width | 14-bit height
            if b.get(p + 3..p + 6) != Some([0x9D, 0x01, 0x2A].as_slice()) {
                return Err(SvgagerError::container("VP8 start code is missing"));
            }
            let w = le_u16(b, p + 6).ok_or_else(|| truncated("VP8"))? & 0x3FFF;
            let h = le_u16(b, p + 8).ok_or_else(|| truncated("VP8"))? & 0x3FFF;
            (WebpChunk::Lossy, u32::from(w), u32::from(h))
        }
        b"VP8L" => {
            if b.get(p) != Some(&0x2F) {
                return Err(SvgagerError::container("VP8L signature byte is missing"));
            }
            let bits = le_u32(b, p + 1).ok_or_else(|| truncated("VP8L"))?;
            let w = (bits & 0x3FFF) + 1;
            let h = ((bits >> 14) & 0x3FFF) + 1;
            (WebpChunk::Lossless, w, h)
        }
        b"VP8X" => {
            // flags(1) | reserved(3) | width-1 (24) | height-1 (24)
            let w = le_u24(b, p + 4).ok_or_else(|| truncated("VP8X"))? + 1;
            let h = le_u24(b, p + 7).ok_or_else(|| truncated("VP8X"))? + 1;
            (WebpChunk::Extended, w, h)
        }
        other => {
            return Err(SvgagerError::container(format!(
                "unknown WebP chunk '{}'",
                String::from_utf8_lossy(other)
            )));
        }
    };

    Ok(ContainerInfo {
        kind: ContainerKind::Webp,
        width,
        height,
        webp_chunk: Some(chunk),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/probe.rs"]
mod tests;
