use dioxus::prelude::*;
use store::Category;

/// `<option>` list for a category `<select>`: an empty first entry followed
/// by every category with its emoji.
#[component]
pub fn CategoryOptions(placeholder: String) -> Element {
    rsx! {
        option { value: "", "{placeholder}" }
        {Category::ALL.iter().map(|category| rsx! {
            option {
                key: "{category}",
                value: category.as_str(),
                {format!("{} {}", category.emoji(), category)}
            }
        })}
    }
}
