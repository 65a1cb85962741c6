use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::loader::types::DecodedImage;

pub trait ImageReader {
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage>;
}
