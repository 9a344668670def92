//! Render the localized catalog to stdout for a quick copy review.
//!
//! Prints the product table under each supported locale, followed by a
//! sample order email draft.

use anyhow::Result;
use lumos_site::form::OrderForm;
use lumos_site::i18n::{catalog, Locale};
use lumos_site::mailto;
use lumos_site::order::OrderRequest;
use lumos_site::products;
use lumos_site::site;

fn main() -> Result<()> {
    for locale in Locale::all() {
        println!("==== {} ({}) ====", locale.native_name(), locale.code());
        println!("{}", site::SITE.tagline.get(locale));
        println!();
        println!(
            "{:<22} {:<24} {:<10} {}",
            catalog::translate(locale, "table.name"),
            catalog::translate(locale, "table.scent"),
            catalog::translate(locale, "table.size"),
            catalog::translate(locale, "table.price"),
        );

        for product in products::localized(locale) {
            println!(
                "{:<22} {:<24} {:<10} {}",
                product.name,
                product.scent.unwrap_or("-"),
                product.size.unwrap_or("-"),
                product.price_display,
            );
        }
        println!();
    }

    // Sample order draft under the default locale
    let form = OrderForm {
        product_id: "lavender-dream".to_string(),
        quantity: 2.0,
        name: "Jo".to_string(),
        email: "jo@example.com".to_string(),
        notes: String::new(),
    };
    if let Some(order) = OrderRequest::from_form(&form, Locale::default_locale()) {
        println!("Sample order draft:");
        println!("{}", mailto::order_mailto(&order));
    }

    Ok(())
}
