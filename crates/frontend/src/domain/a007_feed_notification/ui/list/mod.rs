pub mod state;

use self::state::{create_state, sort_option, sort_option_value, SORT_OPTIONS};
use super::settings::NotificationSettingsModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a007_feed_notification::{
    FeedCategory, FeedFilter, FeedNotification, FeedStats, Priority, READ, UNREAD,
};
use contracts::shared::list_view::ALL;
use leptos::prelude::*;
use thaw::*;

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge--error",
        Priority::Medium => "badge badge--warning",
        Priority::Low => "badge badge--neutral",
    }
}

/// Лента уведомлений. Источник общий с колокольчиком в шапке.
#[component]
pub fn NotificationFeed() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_notifications();
    let state = create_state();
    let list = use_list_view(ctx.feed.into(), state);
    let show_settings = RwSignal::new(false);

    let stats = Memo::new(move |_| ctx.feed.with(|items| FeedStats::of(items)));

    let mark_all = move |_| {
        let marked = ctx.mark_all_read();
        if marked == 0 {
            toasts.info("No unread notifications");
        } else {
            toasts.success("All notifications marked as read");
        }
    };

    let read_state = filter_signal(state, FeedFilter::ReadState);
    let set_read_state = filter_callback(state, FeedFilter::ReadState);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a007_feed_notification--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Notifications"
                subtitle="Stay updated with system alerts, user activities, security events, and important business notifications."
            >
                <Button appearance=ButtonAppearance::Secondary on_click=mark_all>
                    {icon("check")}
                    "Mark all read"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_settings.set(true)>
                    {icon("settings")}
                    "Settings"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total" icon_name="bell" value=Signal::derive(move || stats.get().total.to_string()) />
                    <StatCard
                        label="Unread"
                        icon_name="eye"
                        value=Signal::derive(move || stats.get().unread.to_string())
                        subtitle=Signal::derive(move || {
                            let s = stats.get();
                            (s.unread > 0).then(|| format!("{} high priority", s.high_priority))
                        })
                    />
                    <StatCard label="Today" icon_name="calendar" value=Signal::derive(move || stats.get().today.to_string()) />
                    <StatCard
                        label="High Priority"
                        icon_name="activity"
                        value=Signal::derive(move || stats.get().high_priority.to_string())
                    />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <div class="segmented">
                            {[(ALL, "All"), (UNREAD, "Unread"), (READ, "Read")]
                                .into_iter()
                                .map(|(value, label)| view! {
                                    <button
                                        class="segmented__item"
                                        class:segmented__item--active=move || read_state.get() == value
                                        on:click=move |_| set_read_state.run(value.to_string())
                                    >
                                        {label}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                        <SearchInput value=search on_change=search_callback(state) placeholder="Search notifications..." />
                        <FilterSelect
                            label="Categories"
                            options=FeedCategory::ALL.iter().map(|c| c.as_str()).collect()
                            value=filter_signal(state, FeedFilter::Category)
                            on_change=filter_callback(state, FeedFilter::Category)
                        />
                        <label class="filter-select">
                            <span class="filter-select__label">"Sort"</span>
                            <select
                                class="filter-select__control"
                                prop:value=move || state.with(|s| sort_option_value(s.query.sort_key, s.query.sort_direction))
                                on:change=move |ev| {
                                    if let Some((key, direction)) = sort_option(&event_target_value(&ev)) {
                                        state.update(|s| s.set_sort(key, direction));
                                    }
                                }
                            >
                                {SORT_OPTIONS
                                    .iter()
                                    .map(|(value, label, ..)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No notifications" on_reset=reset_callback(state) />
                    }
                >
                    <div class="feed">
                        <For
                            each=move || list.page.get().items
                            key=|n: &FeedNotification| (n.id, n.read)
                            children=move |n: FeedNotification| {
                                let id = n.id;
                                let received = n.received_label();
                                let title = n.title.clone();
                                let message = n.message.clone();
                                view! {
                                    <div
                                        class=format!("feed__item feed__item--{}", n.kind.as_str())
                                        class:feed__item--unread=!n.read
                                    >
                                        <span class="feed__icon">{n.kind.icon()}</span>
                                        <div class="feed__body">
                                            <div class="feed__title">
                                                <strong><Highlighted text=title search=search /></strong>
                                                {n.priority.map(|p| view! {
                                                    <span class=priority_class(p)>{p.as_str()}</span>
                                                })}
                                                <span class="badge badge--neutral">{n.category.as_str()}</span>
                                            </div>
                                            <p class="feed__message"><Highlighted text=message search=search /></p>
                                            <span class="feed__time">{received}</span>
                                        </div>
                                        <div class="feed__actions">
                                            {(!n.read).then(|| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| {
                                                        ctx.mark_read(id);
                                                    }
                                                >
                                                    {icon("check")}
                                                    "Mark read"
                                                </Button>
                                            })}
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    ctx.delete_feed_item(id);
                                                    toasts.info("Notification deleted");
                                                }
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <PaginationControls
                        current_page=Signal::derive(move || list.page.with(|p| p.page))
                        total_pages=Signal::derive(move || list.page.with(|p| p.total_pages))
                        total_count=Signal::derive(move || list.page.with(|p| p.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                </Show>
            </div>

            <Show when=move || show_settings.get()>
                <NotificationSettingsModal
                    on_close=Callback::new(move |_| show_settings.set(false))
                    on_save=Callback::new(move |_| {
                        show_settings.set(false);
                        toasts.success("Settings saved");
                    })
                />
            </Show>
        </PageFrame>
    }
}
