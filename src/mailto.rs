//! Pre-filled order email drafts.
//!
//! For per-product ordering the site hands the platform's default mail
//! handler a `mailto:` URL with a prepared subject and body. The body lists
//! the order in a fixed line order, omitting absent optionals.

use crate::i18n::currency;
use crate::order::OrderRequest;
use crate::site;

/// Build the `mailto:` URL for an order draft addressed to the brand's
/// order inbox.
pub fn order_mailto(order: &OrderRequest) -> String {
    let subject = format!("[Order] {} x{}", order.product_name, order.quantity);
    format!(
        "mailto:{}?subject={}&body={}",
        site::SITE.email,
        encode_component(&subject),
        encode_component(&order_body(order))
    )
}

/// The draft body: product, locale, pricing, then the optional lines that
/// are present, then the timestamp.
fn order_body(order: &OrderRequest) -> String {
    let locale = order.locale;
    let mut lines = vec![
        format!("Product: {} ({})", order.product_name, order.product_id),
        format!("Locale: {}", locale),
        format!("Unit price: {}", currency::format_currency(locale, order.unit_price)),
        format!("Quantity: {}", order.quantity),
        format!("Total: {}", currency::format_currency(locale, order.total)),
    ];

    if let Some(scent) = order.scent {
        lines.push(format!("Scent: {}", scent));
    }
    if let Some(size) = order.size {
        lines.push(format!("Size: {}", size));
    }
    if let Some(notes) = &order.notes {
        lines.push(format!("Notes: {}", notes));
    }
    if let Some(reply_to) = &order.reply_to {
        lines.push(format!("Reply-to: {}", reply_to));
    }

    lines.push(format!(
        "Timestamp: {}",
        order.submitted_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    ));

    lines.join("\n")
}

/// Percent-encode a mailto component.
///
/// Everything outside the RFC 3986 unreserved set is encoded, byte by byte
/// for multi-byte characters.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push_str(&format!("{:02X}", byte));
            }
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::OrderForm;
    use crate::i18n::Locale;

    fn sample_order(locale: Locale) -> OrderRequest {
        let form = OrderForm {
            product_id: "lavender-dream".to_string(),
            quantity: 2.0,
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            notes: "Gift wrap".to_string(),
        };
        OrderRequest::from_form(&form, locale).unwrap()
    }

    // ==================== Encoding Tests ====================

    #[test]
    fn test_encode_component_basics() {
        assert_eq!(encode_component("abc-123_.~"), "abc-123_.~");
        assert_eq!(encode_component("[Order] x2"), "%5BOrder%5D%20x2");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
    }

    #[test]
    fn test_encode_component_multibyte() {
        // é is 0xC3 0xA9 in UTF-8
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    // ==================== Draft Tests ====================

    #[test]
    fn test_mailto_targets_order_inbox_with_subject() {
        let url = order_mailto(&sample_order(Locale::ENGLISH));
        assert!(url.starts_with("mailto:orders@lumoscandles.example?subject="));
        assert!(url.contains(&encode_component("[Order] Lavender Dream x2")));
    }

    #[test]
    fn test_body_line_order() {
        let body = order_body(&sample_order(Locale::ENGLISH));
        let lines: Vec<_> = body.lines().collect();

        assert_eq!(lines[0], "Product: Lavender Dream (lavender-dream)");
        assert_eq!(lines[1], "Locale: en");
        assert_eq!(lines[2], "Unit price: $18.50");
        assert_eq!(lines[3], "Quantity: 2");
        assert_eq!(lines[4], "Total: $37.00");
        assert_eq!(lines[5], "Scent: Lavender & Vanilla");
        assert_eq!(lines[6], "Size: 200g");
        assert_eq!(lines[7], "Notes: Gift wrap");
        assert_eq!(lines[8], "Reply-to: jo@example.com");
        assert!(lines[9].starts_with("Timestamp: "));
    }

    #[test]
    fn test_body_omits_absent_optionals() {
        let mut order = sample_order(Locale::ENGLISH);
        order.notes = None;
        order.reply_to = None;

        let body = order_body(&order);
        assert!(!body.contains("Notes:"));
        assert!(!body.contains("Reply-to:"));
        assert!(body.contains("Scent:"));
    }

    #[test]
    fn test_body_uses_order_locale_for_prices() {
        let body = order_body(&sample_order(Locale::GERMAN));
        assert!(body.contains("Unit price: 18,50\u{a0}$"));
        assert!(body.contains("Lavendel Traum"));
    }
}
