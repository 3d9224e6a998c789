use super::aggregate::{User, UserRole, UserStatus};

fn user(
    id: u32,
    name: &str,
    role: UserRole,
    status: UserStatus,
    last_seen_minutes: Option<u32>,
    joined_date: Option<&str>,
    permissions: &[&str],
    department: &str,
) -> User {
    let email = format!(
        "{}@example.com",
        name.split_whitespace().next().unwrap_or(name).to_lowercase()
    );
    User {
        id,
        name: name.to_string(),
        email,
        role,
        status,
        last_seen_minutes,
        joined_date: joined_date.map(str::to_string),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
        department: Some(department.to_string()),
    }
}

pub fn mock_users() -> Vec<User> {
    use UserRole::*;
    use UserStatus::*;

    vec![
        user(1, "Jane Cooper", Admin, Active, Some(2), Some("2024-01-15"), &["Full Access"], "Engineering"),
        user(2, "Cody Fisher", Editor, Invited, None, None, &["Edit Content", "View Reports"], "Marketing"),
        user(3, "Kristin Watson", Viewer, Active, Some(18), Some("2024-02-20"), &["View Only"], "Sales"),
        user(4, "Jerome Bell", Viewer, Suspended, Some(2 * 24 * 60), Some("2024-01-10"), &["View Only"], "Support"),
        user(5, "Robert Fox", Admin, Active, Some(60), Some("2023-12-05"), &["Full Access"], "Engineering"),
        user(6, "Darlene Robertson", Editor, Active, Some(3 * 60), Some("2024-03-01"), &["Edit Content", "View Reports", "Manage Users"], "Marketing"),
        user(7, "Leslie Alexander", Manager, Active, Some(5), Some("2024-01-25"), &["View Reports", "Manage Team"], "Sales"),
        user(8, "Emily Johnson", Viewer, Inactive, Some(7 * 24 * 60), Some("2024-02-15"), &["View Only"], "Support"),
    ]
}
