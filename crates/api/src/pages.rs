//! Minimal server-rendered storefront pages.
//!
//! The storefront surface is three small pages (product list, success,
//! cancel); plain string rendering keeps them dependency-free. Product
//! names and descriptions are user-supplied and must be escaped.

use storefront_db::models::product::Product;

/// Landing page shown after a completed payment.
pub const SUCCESS_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Payment complete</title></head>
<body>
<h1>Thanks for your purchase!</h1>
<p>Your payment was completed successfully.</p>
<p><a href="/">Back to the store</a></p>
</body>
</html>
"#;

/// Landing page shown when checkout is abandoned.
pub const CANCEL_PAGE: &str = r#"<!doctype html>
<html>
<head><title>Checkout cancelled</title></head>
<body>
<h1>Checkout cancelled</h1>
<p>No payment was taken.</p>
<p><a href="/">Back to the store</a></p>
</body>
</html>
"#;

/// Render the product list page with a checkout link per product.
pub fn render_product_list(products: &[Product]) -> String {
    let mut items = String::new();
    for product in products {
        items.push_str(&format!(
            "<li>\n<strong>{}</strong> — {} {}\n<p>{}</p>\n<a href=\"/checkout/{}\">Buy now</a>\n</li>\n",
            escape_html(&product.name),
            format_amount(product.amount),
            escape_html(&product.currency),
            escape_html(&product.description),
            product.id,
        ));
    }

    format!(
        "<!doctype html>\n<html>\n<head><title>Store</title></head>\n\
         <body>\n<h1>Products</h1>\n<ul>\n{items}</ul>\n</body>\n</html>\n"
    )
}

/// Format a minor-unit amount as a major-unit decimal string (2000 -> "20.00").
///
/// Display only; amounts are stored and transmitted in minor units.
fn format_amount(minor_units: i64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Escape the five HTML-significant characters.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
