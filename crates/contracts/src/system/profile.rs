use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// Личные данные текущего пользователя.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub location: String,
    pub timezone: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: "Alex".to_string(),
            last_name: "Johnson".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            bio: "Administrator of the Admin Dashboard".to_string(),
            location: "New York, USA".to_string(),
            timezone: "America/New_York".to_string(),
        }
    }
}

impl ProfileForm {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Trimmed copy, or the first failing field.
    pub fn validate(&self) -> Result<ProfileForm, ValidationError> {
        let first_name = validation::required(&self.first_name, "your first name")?;
        let email = validation::email(&self.email)?;
        Ok(ProfileForm {
            first_name: first_name.to_string(),
            last_name: self.last_name.trim().to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            bio: self.bio.trim().to_string(),
            location: self.location.trim().to_string(),
            timezone: self.timezone.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordChange {
    pub current: String,
    pub new_password: String,
    pub confirmation: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required(&self.current, "your current password")?;
        validation::new_password(&self.new_password, &self.confirmation)?;
        if self.new_password == self.current {
            return Err(ValidationError::invalid(
                "New password must differ from the current one",
            ));
        }
        Ok(())
    }
}

/// Каналы уведомлений, которые пользователь может включить.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceKey {
    Email,
    Push,
    Sms,
    Marketing,
    WeeklyDigest,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 5] = [
        PreferenceKey::Email,
        PreferenceKey::Push,
        PreferenceKey::Sms,
        PreferenceKey::Marketing,
        PreferenceKey::WeeklyDigest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreferenceKey::Email => "Email Notifications",
            PreferenceKey::Push => "Push Notifications",
            PreferenceKey::Sms => "SMS Notifications",
            PreferenceKey::Marketing => "Marketing Emails",
            PreferenceKey::WeeklyDigest => "Weekly Digest",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PreferenceKey::Email => "Receive notifications via email",
            PreferenceKey::Push => "Receive browser push notifications",
            PreferenceKey::Sms => "Receive notifications via SMS",
            PreferenceKey::Marketing => "Receive marketing and promotional emails",
            PreferenceKey::WeeklyDigest => "Receive a weekly summary of activities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub marketing: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            sms: false,
            marketing: false,
            weekly_digest: true,
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, key: PreferenceKey) -> bool {
        match key {
            PreferenceKey::Email => self.email,
            PreferenceKey::Push => self.push,
            PreferenceKey::Sms => self.sms,
            PreferenceKey::Marketing => self.marketing,
            PreferenceKey::WeeklyDigest => self.weekly_digest,
        }
    }

    pub fn set(&mut self, key: PreferenceKey, enabled: bool) {
        let slot = match key {
            PreferenceKey::Email => &mut self.email,
            PreferenceKey::Push => &mut self.push,
            PreferenceKey::Sms => &mut self.sms,
            PreferenceKey::Marketing => &mut self.marketing,
            PreferenceKey::WeeklyDigest => &mut self.weekly_digest,
        };
        *slot = enabled;
    }

    pub fn enabled_count(&self) -> usize {
        PreferenceKey::ALL.iter().filter(|k| self.get(**k)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub action: String,
    pub time: String,
    pub ip: String,
}

pub fn mock_activity() -> Vec<ActivityEntry> {
    [
        ("Logged in", "2 hours ago", "192.168.1.1"),
        ("Updated profile", "1 day ago", "192.168.1.1"),
        ("Changed password", "3 days ago", "192.168.1.1"),
        ("Exported data", "1 week ago", "192.168.1.1"),
        ("Logged in", "2 weeks ago", "192.168.1.2"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((action, time, ip), id)| ActivityEntry {
        id,
        action: action.to_string(),
        time: time.to_string(),
        ip: ip.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requires_first_name_and_valid_email() {
        let mut form = ProfileForm {
            first_name: "  ".to_string(),
            ..ProfileForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please enter your first name"
        );

        form.first_name = " Alex ".to_string();
        form.email = "alex@".to_string();
        assert!(matches!(form.validate(), Err(ValidationError::Invalid { .. })));

        form.email = "alex@example.com".to_string();
        let saved = form.validate().unwrap();
        assert_eq!(saved.first_name, "Alex");
        assert_eq!(saved.full_name(), "Alex Johnson");
    }

    #[test]
    fn test_password_change_rules() {
        let mut change = PasswordChange::default();
        assert!(matches!(change.validate(), Err(ValidationError::Required { .. })));

        change.current = "old-secret".to_string();
        change.new_password = "new-secret".to_string();
        change.confirmation = "new-secreT".to_string();
        assert_eq!(change.validate().unwrap_err().to_string(), "New passwords do not match");

        change.new_password = "short".to_string();
        change.confirmation = "short".to_string();
        assert_eq!(
            change.validate().unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );

        change.new_password = "old-secret".to_string();
        change.confirmation = "old-secret".to_string();
        assert!(change.validate().is_err());

        change.new_password = "new-secret".to_string();
        change.confirmation = "new-secret".to_string();
        assert!(change.validate().is_ok());
    }

    #[test]
    fn test_preferences_toggle() {
        let mut prefs = NotificationPreferences::default();
        assert_eq!(prefs.enabled_count(), 2);
        prefs.set(PreferenceKey::Sms, true);
        assert!(prefs.get(PreferenceKey::Sms));
        assert_eq!(prefs.enabled_count(), 3);
    }
}
