use super::*;

#[test]
fn rgba16_is_stored_as_bgra_records() {
    let img = Rgba16Image::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let bytes = import_rgba16(&img);
    let records: Vec<Bgra16> = bytes
        .chunks_exact(8)
        .map(bytemuck::pod_read_unaligned)
        .collect();
    assert_eq!(records, vec![Bgra16::new(1, 2, 3, 4), Bgra16::new(5, 6, 7, 8)]);
}

#[test]
fn rgba8_is_stored_as_bgra_bytes() {
    let img = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]).unwrap();
    assert_eq!(import_rgba8(&img), vec![30, 20, 10, 40]);
}
