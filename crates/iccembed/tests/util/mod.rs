#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Encodes a small RGB gradient with the `png` crate. No chunks between IHDR and IDAT.
pub fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 255 / width) as u8, (y * 255 / height) as u8, 0x80]);
        }
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("failed to write PNG header");
        writer
            .write_image_data(&pixels)
            .expect("failed to write PNG image data");
    }
    out
}

/// Decodes a PNG fully, which validates every chunk CRC and the image data.
pub fn decode_png(bytes: &[u8]) -> png::Info<'static> {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes.to_vec()));
    let mut reader = decoder.read_info().expect("failed to read PNG header");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    reader.next_frame(&mut buf).expect("failed to decode PNG");
    reader.info().clone()
}

/// Baseline-looking JFIF stream: SOI, APP0 (optionally with an RGB thumbnail), DQT, SOF0, SOS and
/// EOI. Only the marker structure matters here.
pub fn jfif(width: u16, height: u16, thumbnail: Option<(u8, u8)>) -> Vec<u8> {
    let (tw, th) = thumbnail.unwrap_or((0, 0));
    let thumb_len = tw as usize * th as usize * 3;

    let mut out = vec![0xff, 0xd8, 0xff, 0xe0];
    out.extend_from_slice(&((16 + thumb_len) as u16).to_be_bytes());
    out.extend_from_slice(b"JFIF\0");
    out.extend_from_slice(&[1, 1, 0, 0, 1, 0, 1, tw, th]);
    out.extend((0..thumb_len).map(|i| (i % 200) as u8));

    // DQT
    out.extend_from_slice(&[0xff, 0xdb, 0x00, 0x43, 0x00]);
    out.extend((1..=64u8).map(|q| q.min(50)));
    // SOF0, single component
    out.extend_from_slice(&[0xff, 0xc0, 0x00, 0x0b, 0x08]);
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&[0x01, 0x01, 0x11, 0x00]);
    // SOS and some entropy-coded data
    out.extend_from_slice(&[0xff, 0xda, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3f, 0x00]);
    out.extend_from_slice(&[0xf8, 0x01, 0x23, 0xff, 0x00, 0x45, 0x67]);
    out.extend_from_slice(&[0xff, 0xd9]);
    out
}

/// Deterministic stand-in for an ICC profile.
pub fn fake_profile(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

pub fn write_temp(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("failed to write fixture");
    path
}
