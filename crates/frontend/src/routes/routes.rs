use crate::dashboards::{
    AdvancedAnalyticsDashboard, AnalyticsDashboard, DataInsightsDashboard, OverviewDashboard,
};
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_content::ui::list::ContentList;
use crate::domain::a004_file::ui::list::FileList;
use crate::domain::a005_report::ui::list::ReportList;
use crate::domain::a006_custom_field::ui::list::CustomFieldList;
use crate::domain::a007_feed_notification::ui::list::NotificationFeed;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::{AccountPage, ProfilePage, SettingsPage};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

/// Путь, на который ведут корень и выход из аккаунта.
pub const HOME_PATH: &str = "/dashboard";

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__subtitle">"The page you are looking for does not exist."</p>
            <A href=HOME_PATH attr:class="button button--primary">"Back to dashboard"</A>
        </div>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! {
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("/dashboard") view=OverviewDashboard />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/reports") view=ReportList />
                    <Route path=path!("/notifications") view=NotificationFeed />
                    <Route path=path!("/content") view=ContentList />
                    <Route path=path!("/files") view=FileList />
                    <Route path=path!("/custom-fields") view=CustomFieldList />
                    <Route path=path!("/analytics") view=AnalyticsDashboard />
                    <Route path=path!("/advanced-analytics") view=AdvancedAnalyticsDashboard />
                    <Route path=path!("/data-insights") view=DataInsightsDashboard />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/account") view=AccountPage />
                </Routes>
            }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
