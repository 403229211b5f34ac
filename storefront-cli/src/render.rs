//! Plain-text rendering of the listing

use std::fmt::Write;

use storefront_client::Screen;
use storefront_client::view::listing::{EMPTY_MESSAGE, ERROR_TITLE};

pub fn render(screen: &Screen, cart_open: bool) -> String {
    let mut out = String::new();
    match screen {
        Screen::Loading => out.push_str("Loading...\n"),
        Screen::Error(message) => {
            let _ = writeln!(out, "{ERROR_TITLE}");
            let _ = writeln!(out, "{message}");
        }
        Screen::Empty { scope } => {
            if let Some(scope) = scope {
                let _ = writeln!(out, "{scope}");
            }
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
        }
        Screen::Listing(listing) => {
            if let Some(scope) = &listing.scope {
                let _ = writeln!(out, "{scope}");
            }
            for section in &listing.sections {
                let _ = writeln!(out, "\n{}", section.category.title());
                for product in &section.products {
                    let name = product.name().unwrap_or(&product.id);
                    match product.price() {
                        Some(price) => {
                            let _ = writeln!(out, "  - {name} ({price:.2})");
                        }
                        None => {
                            let _ = writeln!(out, "  - {name}");
                        }
                    }
                }
            }
        }
    }
    if cart_open {
        out.push_str("\n[cart open]\n");
    }
    out
}
