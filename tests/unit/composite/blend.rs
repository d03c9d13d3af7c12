use super::*;
use crate::pixel::types::Bgra16;

const OPAQUE: u16 = 65535;

fn run(
    dst: &mut [Bgra16],
    src: &[Bgra16],
    mask: Option<&[u8]>,
    rows: usize,
    cols: usize,
    opacity: u8,
    op: CompositeOp,
) -> PixelResult<()> {
    let layout = PixelLayout::bgra::<u16>();
    let stride = cols * 8;
    composite::<u16>(
        &layout,
        SurfaceMut::new(bytemuck::cast_slice_mut(dst), stride),
        Surface::new(bytemuck::cast_slice(src), stride),
        mask.map(|m| Mask::new(m, cols)),
        CompositeParams {
            rows,
            cols,
            opacity,
            op,
        },
    )
}

#[test]
fn over_with_opaque_source_replaces_destination() {
    let src = [Bgra16::new(100, 200, 300, OPAQUE)];
    let mut dst = [Bgra16::new(9000, 9000, 9000, 1000)];
    run(&mut dst, &src, None, 1, 1, 255, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], src[0]);
}

#[test]
fn over_onto_transparent_keeps_source_color() {
    let src = [Bgra16::new(40000, 20000, 10000, 32768)];
    let mut dst = [Bgra16::default()];
    run(&mut dst, &src, None, 1, 1, 255, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], src[0]);
}

#[test]
fn alpha_accumulates_by_over_rule() {
    // 0.5 over 0.5 -> 0.75
    let src = [Bgra16::new(0, 0, 0, 32768)];
    let mut dst = [Bgra16::new(0, 0, 0, 32768)];
    run(&mut dst, &src, None, 1, 1, 255, CompositeOp::Multiply).unwrap();
    assert_eq!(dst[0].alpha, 49152);
}

#[test]
fn zero_opacity_and_zero_mask_are_noops() {
    let src = [Bgra16::new(65535, 0, 0, OPAQUE); 2];
    let before = [Bgra16::new(1, 2, 3, 4); 2];

    let mut dst = before;
    run(&mut dst, &src, None, 1, 2, 0, CompositeOp::Over).unwrap();
    assert_eq!(dst, before);

    let mut dst = before;
    run(&mut dst, &src, Some(&[0, 255]), 1, 2, 255, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], before[0]);
    assert_eq!(dst[1], src[1]);
}

#[test]
fn strides_address_a_sub_rectangle() {
    let layout = PixelLayout::bgra::<u16>();
    // 3x2 destination, composite into the right 2x2 block.
    let mut dst = [Bgra16::default(); 6];
    let src = [Bgra16::new(7, 7, 7, OPAQUE); 4];
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut dst);
    composite::<u16>(
        &layout,
        SurfaceMut::new(&mut dst_bytes[8..], 3 * 8),
        Surface::new(bytemuck::cast_slice(&src), 2 * 8),
        None,
        CompositeParams {
            rows: 2,
            cols: 2,
            opacity: 255,
            op: CompositeOp::Over,
        },
    )
    .unwrap();
    assert_eq!(dst[0], Bgra16::default());
    assert_eq!(dst[3], Bgra16::default());
    for i in [1, 2, 4, 5] {
        assert_eq!(dst[i], src[0]);
    }
}

#[test]
fn erase_reduces_destination_alpha_only() {
    let src = [Bgra16::new(0, 0, 0, 32768)];
    let mut dst = [Bgra16::new(500, 600, 700, OPAQUE)];
    run(&mut dst, &src, None, 1, 1, 255, CompositeOp::Erase).unwrap();
    assert_eq!((dst[0].red, dst[0].green, dst[0].blue), (500, 600, 700));
    assert_eq!(dst[0].alpha, 32767);
}

#[test]
fn copy_replaces_color_and_scales_alpha_by_opacity() {
    let src = [Bgra16::new(10, 20, 30, OPAQUE)];
    let mut dst = [Bgra16::new(9, 9, 9, OPAQUE)];
    run(&mut dst, &src, None, 1, 1, 127, CompositeOp::Copy).unwrap();
    assert_eq!(dst[0], Bgra16::new(10, 20, 30, 32639));
}

#[test]
fn short_stride_and_short_buffers_are_rejected() {
    let layout = PixelLayout::bgra::<u16>();
    let src = [Bgra16::default(); 4];
    let mut dst = [Bgra16::default(); 4];
    let params = CompositeParams {
        rows: 2,
        cols: 2,
        opacity: 255,
        op: CompositeOp::Over,
    };
    let err = composite::<u16>(
        &layout,
        SurfaceMut::new(bytemuck::cast_slice_mut(&mut dst), 8),
        Surface::new(bytemuck::cast_slice(&src), 16),
        None,
        params,
    )
    .unwrap_err();
    assert!(matches!(err, PixelError::Buffer(_)));

    let err = run(&mut dst, &src[..3], None, 2, 2, 255, CompositeOp::Over).unwrap_err();
    assert!(matches!(err, PixelError::Buffer(_)));

    let err = run(&mut dst, &src, Some(&[255; 3]), 2, 2, 255, CompositeOp::Over).unwrap_err();
    assert!(matches!(err, PixelError::Buffer(_)));
}

#[test]
fn partial_mask_coverage_scales_the_blend() {
    let src = [Bgra16::new(OPAQUE, OPAQUE, OPAQUE, OPAQUE)];

    let mut dst = [Bgra16::new(0, 0, 0, OPAQUE)];
    run(&mut dst, &src, Some(&[128]), 1, 1, 255, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], Bgra16::new(32896, 32896, 32896, OPAQUE));

    // Mask and opacity multiply: 128/255 * 128/255 of full coverage.
    let mut dst = [Bgra16::new(0, 0, 0, OPAQUE)];
    run(&mut dst, &src, Some(&[128]), 1, 1, 128, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], Bgra16::new(16513, 16513, 16513, OPAQUE));
}

#[test]
fn partial_mask_coverage_accumulates_alpha_on_transparent_destination() {
    let src = [Bgra16::new(OPAQUE, 0, 0, OPAQUE)];
    let mut dst = [Bgra16::default()];
    run(&mut dst, &src, Some(&[128]), 1, 1, 255, CompositeOp::Over).unwrap();
    assert_eq!(dst[0], Bgra16::new(OPAQUE, 0, 0, 32896));
}
