use dioxus::prelude::*;
use store::Page;

use crate::app_state::use_app_state;
use crate::icons::FaFilePowerpoint;
use crate::user_menu::UserMenu;
use crate::Icon;

/// Top bar: brand on the left, user menu on the right when signed in.
/// The brand returns to the upload page, or to the login form when signed out.
#[component]
pub fn Header() -> Element {
    let mut state = use_app_state();
    let user = state.read().user.clone();

    let go_home = move |_| {
        let mut state = state.write();
        if state.is_signed_in() {
            state.navigate(Page::Upload);
        } else {
            state.show_login();
        }
    };

    rsx! {
        header {
            class: "app-header",
            button {
                class: "app-brand",
                r#type: "button",
                onclick: go_home,
                Icon { icon: FaFilePowerpoint, width: 22, height: 22 }
                span { "Draftly" }
            }
            if let Some(user) = user {
                UserMenu {
                    user,
                    on_edit_profile: move |_| state.write().edit_profile(),
                    on_logout: move |_| state.write().logout(),
                }
            }
        }
    }
}
