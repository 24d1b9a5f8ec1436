//! Avatar button with a dropdown for the signed-in user.

use dioxus::prelude::*;
use store::User;

use crate::icons::{FaChevronDown, FaRightFromBracket, FaUserPen};
use crate::Icon;

/// Round avatar, falling back to the first letter of the name.
#[component]
pub fn Avatar(
    #[props(!optional)] src: Option<String>,
    name: String,
    #[props(default = 32)] size: u32,
) -> Element {
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    rsx! {
        if let Some(src) = src {
            img {
                class: "avatar",
                style: "width: {size}px; height: {size}px;",
                src: "{src}",
                alt: "{name}",
            }
        } else {
            span {
                class: "avatar avatar-placeholder",
                style: "width: {size}px; height: {size}px;",
                "{initial}"
            }
        }
    }
}

/// Dropdown with "Edit profile" and "Log out". Pressing anywhere outside the
/// menu closes it, and so does either action.
#[component]
pub fn UserMenu(
    user: User,
    on_edit_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    let outside = crate::outside_click::use_outside_click(move || {
        if *open.peek() {
            open.set(false);
        }
    });

    rsx! {
        div {
            class: "user-menu",
            onmounted: move |_evt: MountedEvent| {
                #[cfg(target_arch = "wasm32")]
                outside.attach(&_evt);
            },
            button {
                class: "user-menu-trigger",
                r#type: "button",
                onclick: move |_| open.set(!open()),
                Avatar { src: user.avatar.clone(), name: user.display_name().to_string() }
                span { class: "user-menu-name", "{user.display_name()}" }
                Icon { icon: FaChevronDown, width: 12, height: 12 }
            }
            if open() {
                div {
                    class: "user-menu-dropdown",
                    div {
                        class: "user-menu-identity",
                        p { class: "user-menu-identity-name", "{user.display_name()}" }
                        p { class: "user-menu-identity-email", "{user.email}" }
                    }
                    button {
                        class: "user-menu-item",
                        r#type: "button",
                        onclick: move |_| {
                            open.set(false);
                            on_edit_profile.call(());
                        },
                        Icon { icon: FaUserPen, width: 14, height: 14 }
                        "Edit profile"
                    }
                    button {
                        class: "user-menu-item user-menu-item-danger",
                        r#type: "button",
                        onclick: move |_| {
                            open.set(false);
                            on_logout.call(());
                        },
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        "Log out"
                    }
                }
            }
        }
    }
}
