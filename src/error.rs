use std::path::PathBuf;

/// Why an uploaded file did not become a chart image.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported file type: only PNG and JPEG images are accepted")]
    UnsupportedFormat,

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    EmptyImage,

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
