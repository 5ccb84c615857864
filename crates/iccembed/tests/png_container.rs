use std::io::Cursor;

use iccembed::{ChunkType, Container, Error, ImageFormat, PhysicalDimensions, RenderingIntent};

mod util;

#[test]
fn iccp_is_readable_by_png_decoder() {
    let dir = tempfile::tempdir().unwrap();
    let original = util::encode_png(16, 9);
    let path = util::write_temp(dir.path(), "image.png", &original);
    let profile = util::fake_profile(4096);

    let format = iccembed::embed_icc_profile(&path, &profile).unwrap();
    assert_eq!(format, ImageFormat::Png);

    let edited = std::fs::read(&path).unwrap();
    let info = util::decode_png(&edited);
    assert_eq!(info.icc_profile.as_deref(), Some(&*profile));
    assert_eq!((info.width, info.height), (16, 9));

    assert_eq!(iccembed::extract_icc_profile(&path).unwrap(), Some(profile));
}

#[test]
fn chunk_size_invariant() {
    let original = util::encode_png(4, 4);
    for (ty, len) in [
        (ChunkType::Srgb, 1),
        (ChunkType::Phys, 9),
        (ChunkType::Iccp, 0),
        (ChunkType::Iccp, 0xffff),
    ] {
        let data = vec![1u8; len];
        let mut stream = Cursor::new(original.clone());
        iccembed::png::insert(&mut stream, ty, &data).unwrap();
        assert_eq!(
            stream.get_ref().len(),
            original.len() + iccembed::png::RECORD_OVERHEAD + len
        );
        let chunk = iccembed::png::extract(&mut stream, ty).unwrap().unwrap();
        assert_eq!(chunk.data, data);
        assert_eq!(chunk.total_size, 12 + len);
    }
}

#[test]
fn oversized_chunk_is_rejected() {
    let mut stream = Cursor::new(util::encode_png(4, 4));
    let err = iccembed::png::insert(&mut stream, ChunkType::Iccp, &vec![0; 0x10000]).unwrap_err();
    assert!(matches!(
        err,
        iccembed::png::Error::ChunkTooLarge {
            size: 0x10000,
            max: 0xffff,
        }
    ));
}

#[test]
fn dpi_and_srgb_are_decodable() {
    let dir = tempfile::tempdir().unwrap();
    let path = util::write_temp(dir.path(), "image.png", &util::encode_png(8, 8));

    {
        let mut container = Container::open(&path).unwrap();
        container
            .insert_chunk(
                ChunkType::Phys,
                &[0x00, 0x00, 0x0e, 0xc4, 0x00, 0x00, 0x0e, 0xc4, 0x01],
            )
            .unwrap();
        container
            .insert_srgb(RenderingIntent::RelativeColorimetric)
            .unwrap();
    }

    let (x, y) = iccembed::get_dpi(&path).unwrap().unwrap();
    assert!((x - 96.0).abs() < 0.05, "{x}");
    assert!((y - 96.0).abs() < 0.05, "{y}");

    let info = util::decode_png(&std::fs::read(&path).unwrap());
    let dims = info.pixel_dims.unwrap();
    assert_eq!((dims.xppu, dims.yppu), (3780, 3780));
    assert_eq!(dims.unit, png::Unit::Meter);
    assert_eq!(
        info.srgb,
        Some(png::SrgbRenderingIntent::RelativeColorimetric)
    );
}

#[test]
fn physical_dimensions_from_dpi() {
    let mut container = Container::from_stream(Cursor::new(util::encode_png(2, 2))).unwrap();
    container
        .insert_physical_dimensions(PhysicalDimensions::from_dpi(300.0, 150.0))
        .unwrap();
    let (x, y) = container.dpi().unwrap().unwrap();
    assert!((x - 300.0).abs() < 0.05, "{x}");
    assert!((y - 150.0).abs() < 0.05, "{y}");
}

#[test]
fn absent_srgb_before_idat_fails_fast() {
    let mut container = Container::from_stream(Cursor::new(util::encode_png(4, 4))).unwrap();
    let err = container.chunk(ChunkType::Srgb).unwrap_err();
    assert!(matches!(
        err,
        Error::Png(iccembed::png::Error::RequiredChunkMissingBeforeImageData {
            chunk_type: ChunkType::Srgb,
            ..
        })
    ));
    assert!(matches!(
        container.dpi(),
        Err(Error::Png(
            iccembed::png::Error::RequiredChunkMissingBeforeImageData { .. }
        ))
    ));
    assert!(container.chunk(ChunkType::Idat).unwrap().is_some());
}

#[test]
fn raw_iccp_insert_is_zlib() {
    let profile: Vec<u8> = (0..70_000u32).map(|i| (i % 7) as u8).collect();
    let mut stream = Cursor::new(util::encode_png(4, 4));
    iccembed::png::insert_icc_profile(&mut stream, &profile).unwrap();

    let chunk = iccembed::png::extract(&mut stream, ChunkType::Iccp)
        .unwrap()
        .unwrap();
    assert!(chunk.verify_crc());
    let name_end = chunk.data.iter().position(|&b| b == 0).unwrap();
    assert_eq!(&chunk.data[..name_end], b"ICC Profile");
    assert_eq!(chunk.data[name_end + 1], 0);
    let inflated =
        miniz_oxide::inflate::decompress_to_vec_zlib(&chunk.data[name_end + 2..]).unwrap();
    assert_eq!(inflated, profile);
}

#[test]
fn named_profile() {
    let mut stream = Cursor::new(util::encode_png(4, 4));
    iccembed::png::insert_icc_profile_named(&mut stream, "Display P3", b"not an icc").unwrap();
    let embedded = iccembed::png::extract_icc_profile(&mut stream)
        .unwrap()
        .unwrap();
    assert_eq!(embedded.name, "Display P3");
    assert_eq!(embedded.profile, b"not an icc");

    let info = util::decode_png(stream.get_ref());
    assert_eq!(info.icc_profile.as_deref(), Some(&b"not an icc"[..]));
}
