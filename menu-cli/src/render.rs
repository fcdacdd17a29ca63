//! Terminal rendering

use chrono::{DateTime, Utc};
use menu_engine::{FilterState, MenuView, ProductDetail};
use shared::models::{Offer, Outlet, Website};
use std::fmt::Write;

pub const NO_ITEMS: &str = "No items found";

/// Sidebar counts followed by the grouped, filtered menu
pub fn menu(view: &MenuView, state: &FilterState) -> String {
    let mut out = String::new();

    for entry in view.sidebar() {
        let _ = writeln!(out, "  {:<28} {:>4}", entry.name, entry.count);
    }
    out.push('\n');

    let groups = view.grouped(state);
    if groups.is_empty() {
        out.push_str(NO_ITEMS);
        out.push('\n');
        return out;
    }

    for group in groups {
        let _ = writeln!(out, "== {} ==", group.name);
        for item in group.items {
            let price = item.price_at(&view.outlet_id).unwrap_or_default();
            match &item.badge {
                Some(badge) => {
                    let _ = writeln!(out, "  {} [{}]  ₹{}", item.name, badge, price);
                }
                None => {
                    let _ = writeln!(out, "  {}  ₹{}", item.name, price);
                }
            }
        }
    }
    out
}

pub fn product(detail: &ProductDetail) -> String {
    let mut out = String::new();
    let marker = if detail.is_veg { "veg" } else { "non-veg" };
    let _ = writeln!(out, "{} ({})", detail.title, marker);
    if let Some(badge) = &detail.badge {
        let _ = writeln!(
            out,
            "  {} {}",
            badge,
            detail.badge_color.as_deref().unwrap_or_default()
        );
    }
    let _ = writeln!(out, "  Price: ₹{}", detail.price);
    if let Some(description) = &detail.description {
        let _ = writeln!(out, "  {}", description);
    }
    match &detail.image_url {
        Some(url) => {
            let _ = writeln!(out, "  Image: {}", url);
        }
        None => {
            let _ = writeln!(out, "  [{}]", detail.initials);
        }
    }
    if let Some(video) = &detail.video_url {
        let _ = writeln!(out, "  Video: {}", video);
    }
    out
}

pub fn outlets(outlets: &[Outlet]) -> String {
    if outlets.is_empty() {
        return "No outlets found\n".to_string();
    }
    let mut out = String::new();
    for outlet in outlets {
        let _ = writeln!(out, "  {}  {}", outlet.id, outlet.name);
    }
    out
}

/// Offers, marking the expired ones
pub fn offers<'a>(offers: impl IntoIterator<Item = &'a Offer>, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for offer in offers {
        let status = if offer.is_expired(now) { " (expired)" } else { "" };
        let _ = writeln!(out, "  {}  {}{}", offer.id, offer.title, status);
        if !offer.sub_title.is_empty() {
            let _ = writeln!(out, "    {}", offer.sub_title);
        }
        if offer.min_order_value > 0.0 {
            let _ = writeln!(out, "    Min order ₹{}", offer.min_order_value);
        }
        if !offer.validity.end.is_empty() {
            let _ = writeln!(out, "    Valid until {}", offer.validity.end);
        }
    }
    if out.is_empty() {
        out.push_str("No offers available\n");
    }
    out
}

pub fn offer_detail(offer: &Offer, image_base: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", offer.title);
    if !offer.sub_title.is_empty() {
        let _ = writeln!(out, "  {}", offer.sub_title);
    }
    if !offer.description.is_empty() {
        let _ = writeln!(out, "  {}", offer.description);
    }
    if offer.min_order_value > 0.0 {
        let _ = writeln!(out, "  Min order ₹{}", offer.min_order_value);
    }
    let _ = writeln!(out, "  Valid {} to {}", offer.validity.start, offer.validity.end);
    if let Some(image) = offer.offer_image.as_deref().filter(|i| !i.is_empty()) {
        let _ = writeln!(out, "  Image: {}", shared::util::image_url(image_base, image));
    }
    out
}

pub fn website(website: &Website, image_base: &str) -> String {
    let details = &website.basic_details;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", details.name, website.id);
    if !details.logo.is_empty() {
        let _ = writeln!(out, "  Logo: {}", shared::util::image_url(image_base, &details.logo));
    }
    if !details.email.is_empty() {
        let _ = writeln!(out, "  Email: {}", details.email);
    }
    if !details.mobile_number.is_empty() {
        let _ = writeln!(out, "  Phone: {}", details.mobile_number);
    }
    let _ = writeln!(out, "Browse its outlets with `menu outlets --website {}`", website.id);
    out
}

/// Greeting card line with the outlet icon
pub fn greeting(name: &str, icon_url: &str) -> String {
    format!("[{}]\nWelcome back, {}!\n", icon_url, name)
}
