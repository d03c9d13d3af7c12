use super::*;
use crate::pixel::types::Bgra16;

#[test]
fn only_alpha_changes() {
    let layout = PixelLayout::bgra::<u16>();
    let before = [
        Bgra16::new(65535, 65535, 65535, 65535 / 4),
        Bgra16::new(65535 / 3, 65535 / 2, 65535 / 4, 65535 / 2),
    ];
    let mut pixels = before;
    set_alpha::<u16>(&layout, bytemuck::cast_slice_mut(&mut pixels), 127, 2).unwrap();
    for (b, a) in before.iter().zip(pixels.iter()) {
        assert_eq!((a.red, a.green, a.blue), (b.red, b.green, b.blue));
        assert_eq!(a.alpha, 32639);
    }
}

#[test]
fn count_limits_the_run() {
    let layout = PixelLayout::bgra::<u16>();
    let mut pixels = [Bgra16::default(); 3];
    set_alpha::<u16>(&layout, bytemuck::cast_slice_mut(&mut pixels), 255, 2).unwrap();
    assert_eq!(pixels[0].alpha, 65535);
    assert_eq!(pixels[1].alpha, 65535);
    assert_eq!(pixels[2].alpha, 0);
}

#[test]
fn count_beyond_buffer_is_rejected() {
    let layout = PixelLayout::bgra::<u16>();
    let mut pixels = [Bgra16::default(); 2];
    assert!(set_alpha::<u16>(&layout, bytemuck::cast_slice_mut(&mut pixels), 255, 3).is_err());
    assert_eq!(pixels, [Bgra16::default(); 2]);
}
