use dioxus::prelude::*;
use store::View;

use crate::app_state::use_app_state;
use crate::header::Header;
use crate::notice::NoticeOverlay;
use crate::VIEWS_CSS;

use super::{LoginView, OutlineView, ProfileEditView, SettingsView, SignupView, UploadView};

/// Root layout. Renders exactly one view, picked by [`store::AppState::view`].
#[component]
pub fn AppShell() -> Element {
    let state = use_app_state();
    let view = state.read().view();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "app",
            Header {}
            main {
                class: "app-main",
                match view {
                    View::Login => rsx! { LoginView {} },
                    View::Signup => rsx! { SignupView {} },
                    View::ProfileEdit => rsx! { ProfileEditView {} },
                    View::Upload => rsx! { UploadView {} },
                    View::Settings => rsx! { SettingsView {} },
                    View::Outline => rsx! { OutlineView {} },
                }
            }
            NoticeOverlay {}
        }
    }
}
