use super::*;

#[test]
fn bgra16_declares_rgba_with_bgra_offsets() {
    let layout = PixelLayout::bgra::<u16>();
    let positions: Vec<_> = layout.channels().iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![4, 2, 0, 6]);
    assert!(layout.channels().iter().all(|c| c.size == 2));
    assert_eq!(layout.pixel_size(), 8);
    assert_eq!(layout.n_color_channels(), 3);
    assert_eq!(layout.alpha_channel().map(|c| c.position), Some(6));
}

#[test]
fn bgra_matches_validated_constructor() {
    let built = PixelLayout::bgra::<u8>();
    let validated = PixelLayout::new(built.channels().to_vec()).unwrap();
    assert_eq!(built, validated);
}

#[test]
fn overlapping_channels_are_rejected() {
    let err = PixelLayout::new(vec![
        ChannelDescriptor::new("a", 0, 2, ChannelKind::Color),
        ChannelDescriptor::new("b", 1, 2, ChannelKind::Color),
    ])
    .unwrap_err();
    assert!(matches!(err, PixelError::Validation(_)));
}

#[test]
fn two_alpha_channels_are_rejected() {
    let err = PixelLayout::new(vec![
        ChannelDescriptor::new("a", 0, 1, ChannelKind::Alpha),
        ChannelDescriptor::new("b", 1, 1, ChannelKind::Alpha),
    ])
    .unwrap_err();
    assert!(matches!(err, PixelError::Validation(_)));
}

#[test]
fn channel_lookup_reports_out_of_range() {
    let layout = PixelLayout::bgra::<u16>();
    assert_eq!(layout.channel(3).unwrap().name, "alpha");
    assert!(matches!(layout.channel(4), Err(PixelError::Channel(_))));
}

#[test]
fn check_pixels_rejects_short_buffers() {
    let layout = PixelLayout::bgra::<u16>();
    assert!(layout.check_pixels(32, 4, "test").is_ok());
    assert!(matches!(
        layout.check_pixels(31, 4, "test"),
        Err(PixelError::Buffer(_))
    ));
}
