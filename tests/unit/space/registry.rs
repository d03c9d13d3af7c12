use super::*;

#[test]
fn builtin_registry_resolves_both_depths() {
    let reg = ColorSpaceRegistry::with_builtin();
    assert_eq!(
        reg.ids().collect::<Vec<_>>(),
        vec![ColorSpaceId::Rgba8, ColorSpaceId::Rgba16]
    );
    assert_eq!(reg.get(ColorSpaceId::Rgba16).unwrap().pixel_size(), 8);
    assert_eq!(reg.get_by_name("rgba").unwrap().pixel_size(), 4);
}

#[test]
fn empty_registry_reports_missing_ids() {
    let reg = ColorSpaceRegistry::new();
    assert!(reg.is_empty());
    assert!(reg.get(ColorSpaceId::Rgba16).is_err());
    assert!(reg.get_by_name("lab").is_err());
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut reg = ColorSpaceRegistry::new();
    reg.register(Arc::new(RgbaU16Space::new())).unwrap();
    let err = reg.register(Arc::new(RgbaU16Space::new())).unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(reg.len(), 1);
}
