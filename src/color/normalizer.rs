use super::{ColorEncoding, ColorValue, Swatch};

/// Converts a raw palette into the requested encoding, preserving length and order.
pub fn normalize(palette: &[Swatch], encoding: ColorEncoding) -> Vec<ColorValue> {
    match encoding {
        ColorEncoding::Hex => palette
            .iter()
            .map(|swatch| ColorValue::Hex(swatch.hex.clone()))
            .collect(),
        ColorEncoding::Rgb => palette
            .iter()
            .map(|swatch| ColorValue::Rgb(swatch.rgb()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_palette() -> Vec<Swatch> {
        vec![
            Swatch::new("#ff0000", (255, 0, 0)),
            Swatch::new("#00ff00", (0, 255, 0)),
            Swatch::new("#102030", (16, 32, 48)),
        ]
    }

    #[test]
    fn test_normalize_hex_keeps_order() {
        let palette = sample_palette();
        let result = normalize(&palette, ColorEncoding::Hex);

        assert_eq!(result.len(), palette.len());
        for (value, swatch) in result.iter().zip(&palette) {
            assert_eq!(value.as_hex(), Some(swatch.hex.as_str()));
        }
    }

    #[test]
    fn test_normalize_rgb_uses_channels() {
        let palette = sample_palette();
        let result = normalize(&palette, ColorEncoding::Rgb);

        assert_eq!(
            result,
            vec![
                ColorValue::Rgb([255, 0, 0]),
                ColorValue::Rgb([0, 255, 0]),
                ColorValue::Rgb([16, 32, 48]),
            ]
        );
    }

    #[test]
    fn test_normalize_does_not_recompute_hex() {
        // The collaborator's hex string wins even if it disagrees with the channels.
        let palette = vec![Swatch::new("#ABCDEF", (0, 0, 0))];
        assert_eq!(
            normalize(&palette, ColorEncoding::Hex),
            vec![ColorValue::Hex("#ABCDEF".to_string())]
        );
    }

    #[test]
    fn test_normalize_empty_palette() {
        assert!(normalize(&[], ColorEncoding::Hex).is_empty());
        assert!(normalize(&[], ColorEncoding::Rgb).is_empty());
    }
}
