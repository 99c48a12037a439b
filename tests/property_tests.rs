use icon_squeeze::processing::{convert_to_rgb, resize_icon, ConversionOptions};
use icon_squeeze::utils::{format_file_size, icon_file_name};
use image::{ColorType, DynamicImage, GenericImageView};
use proptest::prelude::*;

fn source_image(kind: u8, width: u32, height: u32) -> DynamicImage {
    match kind % 5 {
        0 => DynamicImage::new_rgb8(width, height),
        1 => DynamicImage::new_rgba8(width, height),
        2 => DynamicImage::new_luma8(width, height),
        3 => DynamicImage::new_luma_a8(width, height),
        _ => DynamicImage::new_rgba16(width, height),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_source_becomes_200_square_rgb(
        kind in 0u8..5,
        width in 1u32..=600,
        height in 1u32..=600,
    ) {
        let img = source_image(kind, width, height);
        let out = resize_icon(&convert_to_rgb(&img), 200);

        prop_assert_eq!(out.dimensions(), (200, 200));
        prop_assert_eq!(out.color(), ColorType::Rgb8);
    }

    #[test]
    fn resize_hits_requested_size(size in 1u32..=256, width in 1u32..=300, height in 1u32..=300) {
        let img = DynamicImage::new_rgb8(width, height);
        prop_assert_eq!(resize_icon(&img, size).dimensions(), (size, size));
    }

    #[test]
    fn conversion_options_size_range(size in 0u32..2048) {
        let result = ConversionOptions::new(Some(size), None, false);
        prop_assert_eq!(result.is_ok(), (1..=1024).contains(&size));
    }

    #[test]
    fn conversion_options_level_range(level in 0u8..=255) {
        let result = ConversionOptions::new(None, Some(level), false);
        prop_assert_eq!(result.is_ok(), level <= 6);
    }

    #[test]
    fn icon_file_name_shape(index in 1u32..=8) {
        let name = icon_file_name(index);
        prop_assert!(name.starts_with("icon-"));
        prop_assert!(name.ends_with(".png"));
        prop_assert_eq!(name, format!("icon-{}.png", index));
    }

    #[test]
    fn format_file_size_is_never_empty(bytes in any::<u64>()) {
        let formatted = format_file_size(bytes);
        prop_assert!(formatted.ends_with('B'));
        prop_assert!(!formatted.starts_with(' '));
    }
}
