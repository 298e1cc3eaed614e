pub mod image_request;
pub mod listing;
pub mod response;

pub use image_request::ImagePromptRequest;
pub use listing::{build_product_listing, Product, ProductForm, ProductListing};
pub use response::{GeneratedPrompt, GenerationResponse};
