use super::aggregate::{CustomField, FieldCategory, FieldType};

fn field(
    id: u32,
    name: &str,
    label: &str,
    field_type: FieldType,
    category: FieldCategory,
    required: bool,
    created_at: &str,
    usage_count: u32,
) -> CustomField {
    CustomField {
        id,
        name: name.to_string(),
        label: label.to_string(),
        field_type,
        category,
        required,
        default_value: None,
        options: Vec::new(),
        created_at: created_at.to_string(),
        usage_count,
    }
}

fn with_options(mut field: CustomField, options: &[&str]) -> CustomField {
    field.options = options.iter().map(|o| o.to_string()).collect();
    field
}

pub fn mock_custom_fields() -> Vec<CustomField> {
    use FieldType::*;

    let mut warranty = field(4, "warranty_period", "Warranty Period (months)", Number, FieldCategory::Product, false, "2024-02-10", 156);
    warranty.default_value = Some("12".to_string());

    vec![
        field(1, "employee_id", "Employee ID", Text, FieldCategory::User, true, "2024-01-15", 245),
        with_options(
            field(2, "company_size", "Company Size", Select, FieldCategory::User, false, "2024-01-20", 189),
            &["1-10", "11-50", "51-200", "201-500", "500+"],
        ),
        field(3, "product_sku", "Product SKU", Text, FieldCategory::Product, true, "2024-02-01", 342),
        warranty,
        field(5, "order_notes", "Order Notes", Textarea, FieldCategory::Order, false, "2024-02-15", 423),
        field(6, "content_tags", "Content Tags", Text, FieldCategory::Content, false, "2024-03-01", 278),
        with_options(
            field(7, "subscription_tier", "Subscription Tier", Select, FieldCategory::User, true, "2024-03-05", 512),
            &["Free", "Basic", "Pro", "Enterprise"],
        ),
    ]
}
