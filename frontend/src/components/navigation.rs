//! Top navigation bar with the Upload/Edit tab switcher.

use leptos::*;

use crate::{ActiveTab, APP_NAME, APP_TAGLINE};

/// One selectable entry in the tab bar.
#[derive(Clone, Copy)]
struct NavItem {
    tab: ActiveTab,
    icon: &'static str,
    label: &'static str,
    description: &'static str,
}

const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        tab: ActiveTab::Upload,
        icon: "📤",
        label: "Upload Documents",
        description: "Upload and organize your documents by year",
    },
    NavItem {
        tab: ActiveTab::Edit,
        icon: "✏️",
        label: "Edit Form",
        description: "Review and edit extracted information",
    },
];

#[component]
pub fn Navigation(
    active_tab: ReadSignal<ActiveTab>,
    set_active_tab: WriteSignal<ActiveTab>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <nav class="navigation">
            <div class="nav-inner">
                <div class="nav-brand">
                    <div class="nav-logo">"📄"</div>
                    <div>
                        <h1 class="nav-title">{APP_NAME}</h1>
                        <p class="nav-tagline">{APP_TAGLINE}</p>
                    </div>
                </div>

                // Desktop tab bar
                <div class="nav-tabs">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let tab = item.tab;
                            view! {
                                <button
                                    class="nav-tab"
                                    class:active=move || active_tab.get() == tab
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    <span class="nav-tab-icon">{item.icon}</span>
                                    <span class="nav-tab-text">
                                        <span class="nav-tab-label">{item.label}</span>
                                        <span class="nav-tab-description">{item.description}</span>
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                // Mobile menu toggle
                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile menu: selecting a tab also closes the menu
            <Show when=move || menu_open.get() fallback=|| view! {}>
                <div class="nav-mobile">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let tab = item.tab;
                            view! {
                                <button
                                    class="nav-mobile-item"
                                    class:active=move || active_tab.get() == tab
                                    on:click=move |_| {
                                        set_active_tab.set(tab);
                                        set_menu_open.set(false);
                                    }
                                >
                                    <span class="nav-tab-icon">{item.icon}</span>
                                    <span class="nav-tab-text">
                                        <span class="nav-tab-label">{item.label}</span>
                                        <span class="nav-tab-description">{item.description}</span>
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
