//! Block processors, one per media-bearing block kind.

mod audio;
mod file;
mod image;
mod media_text;
mod video;

pub use audio::AudioProcessor;
pub use file::FileProcessor;
pub use image::ImageProcessor;
pub use media_text::MediaTextProcessor;
pub use video::VideoProcessor;
