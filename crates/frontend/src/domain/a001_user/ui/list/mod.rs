pub mod state;

use self::state::create_state;
use super::details::UserDetails;
use super::invite::{Invitation, InviteUserModal};
use crate::shared::components::badge::{Tone, ToneBadge};
use crate::shared::components::export_modal::ExportModal;
use crate::shared::components::import_modal::ImportModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::{USER_IMPORT_EXTENSIONS, USER_IMPORT_MAX_BYTES};
use crate::shared::date_utils::today_iso;
use crate::shared::export::{build_csv, download_text, export_csv, export_json, CsvExportable, MIME_EXCEL};
use crate::shared::icons::icon;
use crate::shared::list_state::*;
use crate::shared::list_utils::{FilterSelect, Highlighted, NoResults, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_notifications;
use contracts::domain::a001_user::mock::mock_users;
use contracts::domain::a001_user::{User, UserFilter, UserRole, UserSortKey, UserStatus};
use contracts::domain::a005_report::ExportFormat;
use contracts::shared::format::initials;
use leptos::prelude::*;
use thaw::*;

impl CsvExportable for User {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Role", "Status", "Department", "Last Seen"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status.to_string(),
            self.department.clone().unwrap_or_else(|| "N/A".to_string()),
            self.last_seen_label(),
        ]
    }
}

pub fn status_tone(status: UserStatus) -> Tone {
    match status {
        UserStatus::Active => Tone::Success,
        UserStatus::Invited => Tone::Info,
        UserStatus::Suspended => Tone::Error,
        UserStatus::Inactive => Tone::Neutral,
    }
}

fn invited_user(id: u32, invitation: Invitation) -> User {
    let name = invitation
        .email
        .split('@')
        .next()
        .unwrap_or(&invitation.email)
        .to_string();
    User {
        id,
        name,
        email: invitation.email,
        role: invitation.role,
        status: UserStatus::Invited,
        last_seen_minutes: None,
        joined_date: None,
        permissions: Vec::new(),
        department: invitation.department,
    }
}

fn export_users(users: &[User], format: ExportFormat) -> Result<(), String> {
    let rows: Vec<&User> = users.iter().collect();
    let stem = format!("users-export-{}", today_iso());
    match format {
        ExportFormat::Json => export_json(&rows, &format!("{stem}.json")),
        ExportFormat::Excel => {
            if rows.is_empty() {
                return Err("Nothing to export".to_string());
            }
            download_text(&build_csv(&rows), &format!("{stem}.csv"), MIME_EXCEL)
        }
        ExportFormat::Csv | ExportFormat::Pdf => export_csv(&rows, &format!("{stem}.csv")),
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let toasts = use_notifications();
    let users = RwSignal::new(mock_users());
    let state = create_state();
    let list = use_list_view(users.into(), state);

    let selected_user = RwSignal::new(None::<User>);
    let show_invite = RwSignal::new(false);
    let show_import = RwSignal::new(false);
    let show_export = RwSignal::new(false);

    let count_status = move |status: UserStatus| {
        Signal::derive(move || users.with(|u| u.iter().filter(|x| x.status == status).count().to_string()))
    };
    let active_share = Signal::derive(move || {
        users.with(|u| {
            let active = u.iter().filter(|x| x.status == UserStatus::Active).count();
            (!u.is_empty())
                .then(|| format!("{:.1}% of total", active as f64 * 100.0 / u.len() as f64))
        })
    });

    let on_invite = Callback::new(move |invitation: Invitation| {
        let message = format!("Invitation sent to {} as {}", invitation.email, invitation.role);
        users.update(|list| {
            let id = list.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            list.push(invited_user(id, invitation));
        });
        show_invite.set(false);
        toasts.success(message);
    });

    let on_export = Callback::new(move |format: ExportFormat| {
        let result = list.filtered.with_untracked(|rows| export_users(rows, format));
        match result {
            Ok(()) => {
                toasts.success(format!("Users exported as {}", format));
                show_export.set(false);
            }
            Err(e) => {
                toasts.error(e);
            }
        }
    });

    let sort = sort_signal(state);
    let on_sort = sort_callback(state);
    let search = search_signal(state);

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="User Management"
                subtitle="Manage user accounts, roles, permissions, and access control across your organization."
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_import.set(true)>
                    {icon("upload")}
                    "Import Users"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_export.set(true)>
                    {icon("download")}
                    "Export"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_invite.set(true)>
                    {icon("plus")}
                    "Invite User"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Users"
                        icon_name="users"
                        value=Signal::derive(move || users.with(|u| u.len().to_string()))
                    />
                    <StatCard
                        label="Active"
                        icon_name="check"
                        value=count_status(UserStatus::Active)
                        subtitle=active_share
                    />
                    <StatCard label="Invited" icon_name="user" value=count_status(UserStatus::Invited) />
                    <StatCard label="Suspended" icon_name="x" value=count_status(UserStatus::Suspended) />
                </div>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <span class="filter-panel__title">"All users"</span>
                        <span class="filter-panel__badge">
                            {move || {
                                let n = list.filtered.with(Vec::len);
                                format!("{} {}", n, if n == 1 { "user" } else { "users" })
                            }}
                        </span>
                    </div>
                    <div class="filter-panel-content">
                        <SearchInput
                            value=search
                            on_change=search_callback(state)
                            placeholder="Search by name, email, or department..."
                        />
                        <FilterSelect
                            label="Status"
                            options=UserStatus::ALL.iter().map(|s| s.as_str()).collect()
                            value=filter_signal(state, UserFilter::Status)
                            on_change=filter_callback(state, UserFilter::Status)
                        />
                        <FilterSelect
                            label="Roles"
                            options=UserRole::ALL.iter().map(|r| r.as_str()).collect()
                            value=filter_signal(state, UserFilter::Role)
                            on_change=filter_callback(state, UserFilter::Role)
                        />
                    </div>
                </div>

                <Show
                    when=move || list.filtered.with(|v| !v.is_empty())
                    fallback=move || view! {
                        <NoResults message="No users match your filters" on_reset=reset_callback(state) />
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <SortableHeaderCell label="User" sort_key=UserSortKey::Name current=sort on_sort=on_sort min_width=220.0 />
                                    <SortableHeaderCell label="Email" sort_key=UserSortKey::Email current=sort on_sort=on_sort min_width=200.0 />
                                    <SortableHeaderCell label="Role" sort_key=UserSortKey::Role current=sort on_sort=on_sort />
                                    <SortableHeaderCell label="Status" sort_key=UserSortKey::Status current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=120.0>"Department"</TableHeaderCell>
                                    <SortableHeaderCell label="Last Seen" sort_key=UserSortKey::LastSeen current=sort on_sort=on_sort />
                                    <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || list.page.get().items
                                    key=|u: &User| (u.id, u.status)
                                    children=move |user: User| {
                                        let avatar = initials(&user.name);
                                        let name = user.name.clone();
                                        let email = user.email.clone();
                                        let role = user.role.as_str();
                                        let status = user.status;
                                        let department = user.department.clone().unwrap_or_else(|| "—".to_string());
                                        let last_seen = user.last_seen_label();
                                        let row = StoredValue::new(user);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="user-cell">
                                                            <span class="avatar">{avatar}</span>
                                                            <span><Highlighted text=name search=search /></span>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <Highlighted text=email search=search />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{role}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <ToneBadge tone=status_tone(status) text=status.as_str() />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{department}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{last_seen}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| selected_user.set(Some(row.get_value()))
                                                    >
                                                        {icon("eye")}
                                                        "View"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
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

            {move || selected_user.get().map(|user| view! {
                <UserDetails user=user on_close=Callback::new(move |_| selected_user.set(None)) />
            })}

            <Show when=move || show_invite.get()>
                <InviteUserModal
                    on_close=Callback::new(move |_| show_invite.set(false))
                    on_invite=on_invite
                />
            </Show>

            <Show when=move || show_import.get()>
                <ImportModal
                    title="Import Users"
                    hint="CSV up to 5MB. Columns: Name, Email, Role, Department"
                    accept=".csv"
                    allowed_extensions=USER_IMPORT_EXTENSIONS
                    max_bytes=USER_IMPORT_MAX_BYTES
                    missing_message="Please select a CSV file to import"
                    progress_label="Importing users..."
                    on_close=Callback::new(move |_| show_import.set(false))
                    on_imported=Callback::new(move |_| {
                        show_import.set(false);
                        toasts.success("Users imported successfully!");
                    })
                >
                    <Checkbox label="Skip duplicate emails" checked=RwSignal::new(true) />
                    <Checkbox label="Send invitation emails" checked=RwSignal::new(false) />
                </ImportModal>
            </Show>

            <Show when=move || show_export.get()>
                <ExportModal
                    title="Export Users"
                    description="Choose a format to export user data:"
                    formats=&[ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Json]
                    on_export=on_export
                    on_close=Callback::new(move |_| show_export.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn test_user_csv_row() {
        let users = mock_users();
        let first = &users[0];
        let csv = build_csv(&[first]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Name,Email,Role,Status,Department,Last Seen"));
        assert_eq!(
            lines.next(),
            Some("Jane Cooper,jane@example.com,Admin,Active,Engineering,2m ago")
        );
    }

    #[test]
    fn test_invited_user_takes_name_from_email() {
        let user = invited_user(
            42,
            Invitation {
                email: "sam.lee@example.com".to_string(),
                role: UserRole::Editor,
                department: None,
            },
        );
        assert_eq!(user.name, "sam.lee");
        assert_eq!(user.status, UserStatus::Invited);
        assert!(user.joined_date.is_none());
        assert_eq!(user.last_seen_label(), "—");
    }
}
