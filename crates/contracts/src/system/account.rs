use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// Word the user types to confirm account deletion.
pub const DELETE_CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: String,
    pub status: String,
    pub plan: String,
    pub next_billing_date: String,
    pub monthly_cost: String,
}

impl Default for AccountSummary {
    fn default() -> Self {
        Self {
            account_id: "ACC-123456789".to_string(),
            status: "Active".to_string(),
            plan: "Enterprise".to_string(),
            next_billing_date: "April 1, 2024".to_string(),
            monthly_cost: "$499.00".to_string(),
        }
    }
}

/// Usage against a plan limit; `limit == None` means unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStat {
    pub label: String,
    pub used: f64,
    pub limit: Option<f64>,
    pub unit: String,
}

impl UsageStat {
    /// Percent of the limit, 0 for unlimited.
    pub fn percent(&self) -> f64 {
        match self.limit {
            Some(limit) if limit > 0.0 => (self.used / limit * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }
}

pub fn mock_usage() -> Vec<UsageStat> {
    let stat = |label: &str, used, limit, unit: &str| UsageStat {
        label: label.to_string(),
        used,
        limit,
        unit: unit.to_string(),
    };
    vec![
        stat("Storage Used", 2.4, Some(100.0), "GB"),
        stat("API Requests (This Month)", 45_230.0, Some(100_000.0), "requests"),
        stat("Active Users", 124.0, None, "users"),
    ]
}

/// Платёжные реквизиты компании.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    pub company_name: String,
    pub tax_id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for BillingInfo {
    fn default() -> Self {
        Self {
            company_name: "Acme Inc.".to_string(),
            tax_id: "TAX-123456789".to_string(),
            address: "123 Business St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "United States".to_string(),
        }
    }
}

impl BillingInfo {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required(&self.company_name, "a company name")?;
        validation::required(&self.address, "a billing address")?;
        validation::required(&self.city, "a city")?;
        validation::required(&self.country, "a country")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    /// Full secret. Only the masked form is rendered.
    pub key: String,
    pub created: String,
    pub last_used: Option<String>,
    pub permissions: Vec<String>,
}

impl ApiKey {
    /// Creates a live key from a random token.
    pub fn create(id: String, name: &str, token: &str, today: &str) -> Result<ApiKey, ValidationError> {
        let name = validation::required(name, "an API key name")?;
        Ok(ApiKey {
            id,
            name: name.to_string(),
            key: format!("sk_live_{token}"),
            created: today.to_string(),
            last_used: None,
            permissions: vec!["read".to_string(), "write".to_string()],
        })
    }

    /// `sk_live_51H...k3m2`: prefix plus three and the last four characters.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.key.chars().collect();
        let prefix_len = self.key.match_indices('_').nth(1).map(|(i, _)| i + 4);
        match prefix_len {
            Some(head) if chars.len() > head + 4 => {
                let head: String = chars[..head].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}...{tail}")
            }
            _ => self.key.clone(),
        }
    }

    pub fn last_used_label(&self) -> &str {
        self.last_used.as_deref().unwrap_or("Never")
    }
}

pub fn mock_api_keys() -> Vec<ApiKey> {
    vec![
        ApiKey {
            id: "key-1".to_string(),
            name: "Production API Key".to_string(),
            key: "sk_live_51Hq8Lm2Zt0aVb7Kk3m2".to_string(),
            created: "2024-01-15".to_string(),
            last_used: Some("2 hours ago".to_string()),
            permissions: vec!["read".to_string(), "write".to_string()],
        },
        ApiKey {
            id: "key-2".to_string(),
            name: "Development API Key".to_string(),
            key: "sk_test_78Fw2Rn6Yc1dQe4Px9p1".to_string(),
            created: "2024-02-20".to_string(),
            last_used: Some("1 week ago".to_string()),
            permissions: vec!["read".to_string()],
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub date: String,
    pub amount: String,
    pub status: String,
}

impl Invoice {
    pub fn file_name(&self) -> String {
        format!("invoice-{}.txt", self.id)
    }

    pub fn to_text(&self) -> String {
        format!(
            "Invoice #{}\nDate: {}\nAmount: {}\nStatus: {}",
            self.id, self.date, self.amount, self.status
        )
    }
}

pub fn mock_invoices() -> Vec<Invoice> {
    ["2024-03-01", "2024-02-01", "2024-01-01"]
        .into_iter()
        .zip(1..)
        .map(|(date, id)| Invoice {
            id,
            date: date.to_string(),
            amount: "$499.00".to_string(),
            status: "Paid".to_string(),
        })
        .collect()
}

/// Portable copy of the account data. API secrets are masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountExport {
    pub summary: AccountSummary,
    pub billing: BillingInfo,
    pub api_keys: Vec<ApiKey>,
    pub invoices: Vec<Invoice>,
    pub exported_at: String,
}

impl AccountExport {
    pub fn new(
        summary: AccountSummary,
        billing: BillingInfo,
        api_keys: &[ApiKey],
        invoices: Vec<Invoice>,
        exported_at: &str,
    ) -> Self {
        let api_keys = api_keys
            .iter()
            .map(|k| ApiKey {
                key: k.masked(),
                ..k.clone()
            })
            .collect();
        Self {
            summary,
            billing,
            api_keys,
            invoices,
            exported_at: exported_at.to_string(),
        }
    }
}

crate::labelled_enum! {
    pub enum RetentionPeriod {
        Forever => "Keep forever",
        OneYear => "1 year",
        TwoYears => "2 years",
        FiveYears => "5 years",
        TenYears => "10 years",
    }
}

/// Deletion goes through only when the user typed the confirmation word.
pub fn confirm_deletion(typed: &str) -> Result<(), ValidationError> {
    if typed.trim() == DELETE_CONFIRMATION {
        Ok(())
    } else {
        Err(ValidationError::invalid(format!(
            "Type \"{DELETE_CONFIRMATION}\" to confirm"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_create_requires_name() {
        assert_eq!(
            ApiKey::create("k".into(), "  ", "abc", "2024-03-15").unwrap_err().to_string(),
            "Please enter an API key name"
        );
        let key = ApiKey::create("k".into(), " CI key ", "0123456789abcdef", "2024-03-15").unwrap();
        assert_eq!(key.name, "CI key");
        assert_eq!(key.key, "sk_live_0123456789abcdef");
        assert_eq!(key.last_used_label(), "Never");
    }

    #[test]
    fn test_masked_key() {
        let keys = mock_api_keys();
        assert_eq!(keys[0].masked(), "sk_live_51H...k3m2");
        assert_eq!(keys[1].masked(), "sk_test_78F...x9p1");

        let short = ApiKey {
            key: "sk_live_ab".to_string(),
            ..keys[0].clone()
        };
        assert_eq!(short.masked(), "sk_live_ab");
    }

    #[test]
    fn test_export_never_contains_secrets() {
        let keys = mock_api_keys();
        let export = AccountExport::new(
            AccountSummary::default(),
            BillingInfo::default(),
            &keys,
            mock_invoices(),
            "2024-03-15T10:00:00Z",
        );
        let json = serde_json::to_string(&export).unwrap();
        assert!(!json.contains(&keys[0].key));
        assert!(json.contains("\"apiKeys\""));
    }

    #[test]
    fn test_billing_requires_company() {
        let billing = BillingInfo {
            company_name: String::new(),
            ..BillingInfo::default()
        };
        assert_eq!(billing.validate().unwrap_err().to_string(), "Please enter a company name");
        assert!(BillingInfo::default().validate().is_ok());
    }

    #[test]
    fn test_usage_percent() {
        let usage = mock_usage();
        assert!((usage[1].percent() - 45.23).abs() < 1e-9);
        assert_eq!(usage[2].percent(), 0.0);
    }

    #[test]
    fn test_deletion_confirmation() {
        assert!(confirm_deletion("DELETE").is_ok());
        assert!(confirm_deletion("delete").is_err());
        assert_eq!(mock_invoices()[0].to_text(), "Invoice #1\nDate: 2024-03-01\nAmount: $499.00\nStatus: Paid");
    }
}
