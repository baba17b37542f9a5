pub mod experience_images;
pub mod experiences;
