use crate::shared::format::relative_short;
use crate::shared::list_view::{Filterable, Searchable, SortValue, Sortable};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum UserStatus {
        Active => "Active",
        Invited => "Invited",
        Suspended => "Suspended",
        Inactive => "Inactive",
    }
}

crate::labelled_enum! {
    pub enum UserRole {
        Admin => "Admin",
        Editor => "Editor",
        Manager => "Manager",
        Viewer => "Viewer",
    }
}

/// Учётная запись пользователя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Minutes since last activity, `None` if never seen
    pub last_seen_minutes: Option<u32>,
    /// `YYYY-MM-DD`, `None` for pending invitations
    pub joined_date: Option<String>,
    pub permissions: Vec<String>,
    pub department: Option<String>,
}

impl User {
    pub fn last_seen_label(&self) -> String {
        self.last_seen_minutes
            .map(relative_short)
            .unwrap_or_else(|| "—".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserFilter {
    Status,
    Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSortKey {
    Name,
    Email,
    Role,
    Status,
    LastSeen,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.department.as_deref());
        fields
    }
}

impl Filterable<UserFilter> for User {
    fn filter_value(&self, field: UserFilter) -> &str {
        match field {
            UserFilter::Status => self.status.as_str(),
            UserFilter::Role => self.role.as_str(),
        }
    }
}

impl Sortable<UserSortKey> for User {
    fn sort_value(&self, key: UserSortKey) -> SortValue<'_> {
        match key {
            UserSortKey::Name => SortValue::Text(&self.name),
            UserSortKey::Email => SortValue::Text(&self.email),
            UserSortKey::Role => SortValue::Text(self.role.as_str()),
            UserSortKey::Status => SortValue::Text(self.status.as_str()),
            // never seen sorts after everyone else
            UserSortKey::LastSeen => {
                SortValue::Number(self.last_seen_minutes.map_or(f64::MAX, f64::from))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_user::mock::mock_users;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};

    #[test]
    fn test_search_matches_department() {
        let users = mock_users();
        let mut query = ListQuery::<UserFilter, UserSortKey>::new(UserSortKey::Name, SortDirection::Ascending);
        query.search_text = "support".into();

        let view = derive_view(&users, &query);
        assert!(!view.is_empty());
        assert!(view
            .iter()
            .all(|u| u.department.as_deref() == Some("Support")));
    }

    #[test]
    fn test_status_and_role_filters_combine() {
        let users = mock_users();
        let query = ListQuery::new(UserSortKey::Name, SortDirection::Ascending)
            .with_filter(UserFilter::Status, Selection::Only("Active".into()))
            .with_filter(UserFilter::Role, Selection::Only("Admin".into()));

        let view = derive_view(&users, &query);
        assert!(!view.is_empty());
        assert!(view
            .iter()
            .all(|u| u.status == UserStatus::Active && u.role == UserRole::Admin));
    }

    #[test]
    fn test_last_seen_sorts_by_recency() {
        let users = mock_users();
        let query = ListQuery::<UserFilter, UserSortKey>::new(UserSortKey::LastSeen, SortDirection::Ascending);

        let view = derive_view(&users, &query);
        assert_eq!(view.first().and_then(|u| u.last_seen_minutes), Some(2));
        assert_eq!(view.last().and_then(|u| u.last_seen_minutes), None);
    }

    #[test]
    fn test_last_seen_label() {
        let users = mock_users();
        assert_eq!(users[0].last_seen_label(), "2m ago");
        assert_eq!(users[1].last_seen_label(), "—");
    }
}
