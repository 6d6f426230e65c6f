/// Decoded preview of the image currently being classified.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewImage {
    /// Attempt token the preview belongs to; changes whenever the image does.
    pub attempt: u64,
    pub file_name: String,
    /// Downscaled pixels ready to upload as an egui texture.
    pub image: egui::ColorImage,
}
