use dioxus::prelude::*;

/// Glyph for position `star` (1-based) of a picker showing `rating`.
pub fn star_glyph(star: u8, rating: u8) -> &'static str {
    if star <= rating {
        "⭐"
    } else {
        "☆"
    }
}

/// Five clickable stars. Clicking star N reports N.
#[component]
pub fn StarRating(value: u8, on_change: EventHandler<u8>) -> Element {
    rsx! {
        div {
            class: "star-rating",
            for star in 1..=5u8 {
                span {
                    key: "{star}",
                    class: "star",
                    title: "{star}",
                    onclick: move |_| on_change.call(star),
                    {star_glyph(star, value)}
                }
            }
        }
    }
}
