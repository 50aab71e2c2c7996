use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] could not read the font outlines
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to decode the base image
    Image(#[from] image::ImageError),

    #[error("caption is not valid UTF-8: {0}")]
    /// The caption bytes were not valid UTF-8
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid caption style: {0}")]
    /// A caption style document could not be parsed
    Style(#[from] serde_yaml::Error),

    #[error("invalid caption style: {0}")]
    /// A caption style parsed but holds values layout cannot work with
    StyleRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_errors_name_the_caption() {
        let bytes: Vec<u8> = "fo".bytes().chain([0xff]).collect();
        let err: CaptionError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(err.to_string().starts_with("caption is not valid UTF-8"));
    }

    #[test]
    fn io_errors_are_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such font");
        let err = CaptionError::from(io);
        assert_eq!(err.to_string(), "no such font");
        assert!(matches!(err, CaptionError::Io(_)));
    }
}
