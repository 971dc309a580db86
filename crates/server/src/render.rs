//! HTML rendering for the catalog page.
//!
//! The page is a single document: a filter form followed by a grid of
//! product cards. Every piece of dynamic text goes through `escape_html`.

use crate::orchestrator::CatalogPage;
use catalog::Product;
use pipeline::SortOrder;

const STYLESHEET: &str = include_str!("../assets/catalog.css");

/// Presentation settings that do not depend on the request
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub page_title: String,
    pub currency_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            page_title: "Catalogue de Produits".to_string(),
            currency_label: "dh".to_string(),
        }
    }
}

/// Render the full HTML document for one request
pub fn render_page(page: &CatalogPage, settings: &RenderSettings) -> String {
    let mut html = String::with_capacity(16 * 1024 + page.products.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(&settings.page_title)
    ));
    html.push_str("    <style>\n");
    html.push_str(STYLESHEET);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");

    render_filter_form(&mut html, page);

    if let Some(error) = &page.error {
        html.push_str(&format!(
            "        <div class=\"notice\" role=\"alert\">{}</div>\n",
            escape_html(error)
        ));
    }

    html.push_str(&format!(
        "        <p class=\"result-count\">{}</p>\n",
        result_count_label(page.products.len(), page.total)
    ));

    html.push_str("        <div class=\"products-grid\">\n");
    for product in &page.products {
        render_product_card(&mut html, product, &settings.currency_label);
    }
    html.push_str("        </div>\n    </div>\n</body>\n</html>\n");

    html
}

fn render_filter_form(html: &mut String, page: &CatalogPage) {
    let query = &page.query;
    let selected_category = query.category.as_deref().unwrap_or("");

    html.push_str("        <form method=\"post\" action=\"/\">\n");
    html.push_str("            <div class=\"filters\">\n");
    html.push_str("                <div class=\"filter-group\">\n");

    // Category
    html.push_str("                    <div class=\"filter-item\">\n");
    html.push_str("                        <label for=\"category\">Catégorie:</label>\n");
    html.push_str("                        <select id=\"category\" name=\"category\">\n");
    html.push_str("                            <option value=\"\">Toutes les catégories</option>\n");
    for category in &page.categories {
        html.push_str(&format!(
            "                            <option value=\"{}\"{}>{}</option>\n",
            escape_html(category),
            selected_attr(category == selected_category),
            escape_html(&capitalize_first(category))
        ));
    }
    html.push_str("                        </select>\n");
    html.push_str("                    </div>\n");

    // Price range
    html.push_str("                    <div class=\"filter-item\">\n");
    html.push_str("                        <label>Prix:</label>\n");
    html.push_str("                        <div class=\"price-range\">\n");
    html.push_str(&format!(
        "                            <input type=\"number\" name=\"min_price\" placeholder=\"Min\" min=\"0\" step=\"any\" value=\"{}\">\n",
        format_bound(query.min_price)
    ));
    html.push_str(&format!(
        "                            <input type=\"number\" name=\"max_price\" placeholder=\"Max\" min=\"0\" step=\"any\" value=\"{}\">\n",
        format_bound(query.max_price)
    ));
    html.push_str("                        </div>\n");
    html.push_str("                    </div>\n");

    // Sort
    html.push_str("                    <div class=\"filter-item\">\n");
    html.push_str("                        <label for=\"sort\">Trier par:</label>\n");
    html.push_str("                        <select id=\"sort\" name=\"sort\">\n");
    html.push_str(&format!(
        "                            <option value=\"\"{}>Aucun tri</option>\n",
        selected_attr(query.sort.is_none())
    ));
    for (order, label) in [
        (SortOrder::Ascending, "Prix croissant"),
        (SortOrder::Descending, "Prix décroissant"),
    ] {
        html.push_str(&format!(
            "                            <option value=\"{}\"{}>{}</option>\n",
            order.as_str(),
            selected_attr(query.sort == Some(order)),
            label
        ));
    }
    html.push_str("                        </select>\n");
    html.push_str("                    </div>\n");

    html.push_str(
        "                    <button type=\"submit\" class=\"filter-button\">Filtrer les produits</button>\n",
    );
    html.push_str("                </div>\n");
    html.push_str("            </div>\n");
    html.push_str("        </form>\n");
}

fn render_product_card(html: &mut String, product: &Product, currency_label: &str) {
    let title = escape_html(&product.title);

    html.push_str("            <div class=\"product-card\">\n");
    html.push_str(&format!(
        "                <img src=\"{}\" alt=\"{}\" class=\"product-image\">\n",
        escape_html(&product.image),
        title
    ));
    html.push_str(&format!(
        "                <h3 class=\"product-title\">{}</h3>\n",
        title
    ));
    html.push_str(&format!(
        "                <div class=\"product-category\">{}</div>\n",
        escape_html(&capitalize_first(&product.category))
    ));
    html.push_str(&format!(
        "                <div class=\"product-price\">{} {}</div>\n",
        product.price,
        escape_html(currency_label)
    ));
    html.push_str("            </div>\n");
}

fn selected_attr(selected: bool) -> &'static str {
    if selected { " selected" } else { "" }
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map(|value| value.to_string()).unwrap_or_default()
}

fn result_count_label(shown: usize, total: usize) -> String {
    match (shown, total) {
        (0, 0) => "Aucun produit disponible.".to_string(),
        (0, _) => "Aucun produit ne correspond à vos critères.".to_string(),
        (1, _) => format!("1 produit sur {}", total),
        _ => format!("{} produits sur {}", shown, total),
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escape the five HTML-significant characters for text and attribute
/// context
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
