//! Sidebar with collapsible navigation groups.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::{APP_SUBTITLE, APP_TITLE};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Overview",
            items: vec![
                ("/dashboard", "Dashboard", "dashboard"),
                ("/users", "Users", "users"),
                ("/products", "Products", "package"),
                ("/reports", "Reports", "file-text"),
                ("/notifications", "Notifications", "bell"),
            ],
        },
        MenuGroup {
            id: "content",
            label: "Content",
            items: vec![
                ("/content", "Content", "edit"),
                ("/files", "Files", "folder"),
                ("/custom-fields", "Custom Fields", "sliders"),
            ],
        },
        MenuGroup {
            id: "insights",
            label: "Insights",
            items: vec![
                ("/analytics", "Analytics", "trending-up"),
                ("/advanced-analytics", "Advanced Analytics", "database"),
                ("/data-insights", "Data & Insights", "activity"),
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            items: vec![("/settings", "Settings", "settings")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let location = use_location();
    let unread = ctx.unread_count();

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">"AD"</div>
                <div>
                    <div class="app-sidebar__title">{APP_TITLE}</div>
                    <div class="app-sidebar__subtitle">{APP_SUBTITLE}</div>
                </div>
            </div>

            {groups.into_iter().map(|group| {
                let gid = group.id;
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__group-title"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid)>
                            <nav class="app-sidebar__children">
                                {group.items.iter().map(|&(path, label, icon_name)| {
                                    let is_active = move || location.pathname.get().starts_with(path);
                                    view! {
                                        <A href=path attr:class="app-sidebar__item">
                                            <div
                                                class="app-sidebar__item-content"
                                                class:app-sidebar__item--active=is_active
                                            >
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                                {(path == "/notifications").then(|| view! {
                                                    <Show when=move || { unread.get() > 0 }>
                                                        <span class="app-sidebar__badge">{move || unread.get()}</span>
                                                    </Show>
                                                })}
                                            </div>
                                        </A>
                                    }
                                }).collect_view()}
                            </nav>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> Vec<&'static str> {
        get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(path, _, _)| path))
            .collect()
    }

    #[test]
    fn test_insights_group_links_analytics_pages() {
        let insights = get_menu_groups()
            .into_iter()
            .find(|g| g.id == "insights")
            .expect("insights group");
        let links: Vec<&str> = insights.items.iter().map(|(path, _, _)| *path).collect();
        assert_eq!(links, vec!["/analytics", "/advanced-analytics", "/data-insights"]);
    }

    #[test]
    fn test_menu_paths_unique() {
        let mut all = paths();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
