//! Image bytes to `data:` URLs.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Raster formats recognized by their leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, 0x50, 0x4E, ..] => Some(ImageFormat::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Base64 `data:` URL for PNG or JPEG bytes; `None` for other formats.
pub fn image_data_url(bytes: &[u8]) -> Option<String> {
    let format = ImageFormat::detect(bytes)?;
    Some(format!(
        "data:{};base64,{}",
        format.mime_type(),
        STANDARD.encode(bytes)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature() {
        let bytes = [0x89, 0x50, 0x4E, 0x47];
        assert_eq!(image_data_url(&bytes).unwrap(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_jpeg_signature() {
        let url = image_data_url(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_unknown_or_short_data() {
        assert_eq!(image_data_url(b"GIF89a"), None);
        assert_eq!(image_data_url(&[0x89, 0x50]), None);
        assert_eq!(image_data_url(&[]), None);
    }
}
