use dioxus::prelude::*;
use ui::{Navbar, RequireSession};

use crate::Route;

/// Layout for every signed-in page: navbar on top, page below. Without a
/// session it sends the visitor to the login page instead.
#[component]
pub fn Guarded() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireSession {
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
            Navbar {
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}
