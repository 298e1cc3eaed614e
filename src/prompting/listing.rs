use crate::text_utils::{DescriptionCleaner, SizeExtractor};
use serde::Serialize;

/// Form values for the free-text path. An explicit value, not module state:
/// callers construct one per submission.
#[derive(Clone, Debug, Default)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductListing {
    pub product: Product,
}

#[derive(Clone, Debug, Serialize)]
pub struct Product {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Builds the outbound `product.*` payload from form values: the description
/// is cleaned, sizes come from the raw description with the title as a
/// fallback source. Pure; the caller owns the result.
pub fn build_product_listing(
    form: &ProductForm,
    cleaner: &DescriptionCleaner,
    extractor: &SizeExtractor,
) -> ProductListing {
    let sizes = {
        let sizes = extractor.run(&form.description);
        if sizes.is_empty() {
            extractor.run(&form.title)
        } else {
            sizes
        }
    };
    ProductListing {
        product: Product {
            title: form.title.trim().to_string(),
            description: cleaner.run(&form.description),
            sizes,
            image: form.image_url.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_utils::test_text::*;

    fn listing_for(form: &ProductForm) -> ProductListing {
        build_product_listing(form, &DescriptionCleaner::new(), &SizeExtractor::new())
    }

    #[test]
    fn test_payload_shape() {
        let form = ProductForm {
            title: " Youth Shorts ".to_string(),
            description: YOUTH_SHORTS_TEXT.to_string(),
            image_url: Some("https://cdn.example.com/shorts.jpg".to_string()),
        };
        let listing = listing_for(&form);
        assert_eq!(listing.product.title, "Youth Shorts");
        assert_eq!(
            listing.product.sizes,
            ["12/14", "16/18", "S", "M", "L"]
        );
        assert!(!listing.product.description.contains("Add to cart"));

        let body = serde_json::to_value(&listing).unwrap();
        assert_eq!(body["product"]["sizes"][0], "12/14");
        assert_eq!(body["product"]["image"], "https://cdn.example.com/shorts.jpg");
    }

    #[test]
    fn test_title_fallback_for_sizes() {
        let form = ProductForm {
            title: "Big Kid Tee 10-12".to_string(),
            description: "A soft tee with no size info in the copy.".to_string(),
            image_url: None,
        };
        let listing = listing_for(&form);
        assert_eq!(listing.product.sizes, ["10", "12"]);
    }

    #[test]
    fn test_empty_sizes_and_image_omitted() {
        let form = ProductForm {
            title: "Gift Card".to_string(),
            description: "Redeemable online.".to_string(),
            image_url: None,
        };
        let body = serde_json::to_value(listing_for(&form)).unwrap();
        assert!(body["product"].get("sizes").is_none());
        assert!(body["product"].get("image").is_none());
    }
}
