use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, GenericImageView};

/// Handle to the image a collaborator should analyze.
///
/// The extractor never decodes it; it is passed through to the collaborators as-is.
#[derive(Clone)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
    Bytes(Arc<[u8]>),
    Decoded(Arc<DynamicImage>),
}

impl ImageSource {
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Short form for log lines, raw bytes are never printed.
impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "path:{}", path.display()),
            ImageSource::Url(url) => write!(f, "url:{url}"),
            ImageSource::Bytes(bytes) => write!(f, "bytes:{}", bytes.len()),
            ImageSource::Decoded(image) => {
                let (width, height) = image.dimensions();
                write!(f, "decoded:{width}x{height}")
            }
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(Arc::from(bytes))
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(image: DynamicImage) -> Self {
        ImageSource::Decoded(Arc::new(image))
    }
}

impl From<Arc<DynamicImage>> for ImageSource {
    fn from(image: Arc<DynamicImage>) -> Self {
        ImageSource::Decoded(image)
    }
}
