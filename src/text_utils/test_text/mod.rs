// Shared product-page fixtures for the text_utils tests.

pub const DINO_TEE_PAGE: &str = "<html><body>\
<div id=\"product\">\
<h1>Toddler Dino Tee</h1>\
<p>Soft cotton tee with a dinosaur print.   Pre-shrunk and machine washable.</p>\
<p>Sizes: 2T, 3T, 4T</p>\
<p>SKU 889900112233.</p>\
</div>\
<div id=\"footer\">\
<p>You may also like</p>\
<p>Add to cart</p>\
<p>Facebook Instagram</p>\
</div>\
</body></html>";

pub const YOUTH_SHORTS_TEXT: &str = "Mesh basketball shorts for youth. \
Available in 12/14, 16/18, 12/14 and S-M-L options. UPC 012345678905 printed inside. \
Add to cart";
