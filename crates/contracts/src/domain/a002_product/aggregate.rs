use crate::shared::list_view::{parse_numeric, Filterable, Searchable, SortValue, Sortable};
use crate::shared::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};

crate::labelled_enum! {
    pub enum ProductCategory {
        Subscription => "Subscription",
        License => "License",
        OneTime => "One-time",
        AddOn => "Add-on",
    }
}

crate::labelled_enum! {
    pub enum ProductStatus {
        Active => "Active",
        Discontinued => "Discontinued",
        Draft => "Draft",
    }
}

/// Продукт каталога. Цена и выручка хранятся в отображаемом виде (`"$2,499/year"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: ProductCategory,
    pub price: String,
    pub status: ProductStatus,
    pub users: u32,
    pub revenue: String,
}

impl Product {
    pub fn revenue_amount(&self) -> f64 {
        parse_numeric(&self.revenue)
    }
}

/// Форма "Add New Product".
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: ProductCategory,
    pub status: ProductStatus,
    pub price: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: ProductCategory::Subscription,
            status: ProductStatus::Active,
            price: String::new(),
        }
    }
}

impl ProductDraft {
    /// New products start with no users and no revenue.
    pub fn build(&self, id: u32) -> Result<Product, ValidationError> {
        let name = validation::required(&self.name, "a product name")?;
        let price = validation::required(&self.price, "a price")?;
        Ok(Product {
            id,
            name: name.to_string(),
            category: self.category,
            price: price.to_string(),
            status: self.status,
            users: 0,
            revenue: "$0".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductFilter {
    Category,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductSortKey {
    Name,
    Category,
    Price,
    Users,
    Revenue,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}

impl Filterable<ProductFilter> for Product {
    fn filter_value(&self, field: ProductFilter) -> &str {
        match field {
            ProductFilter::Category => self.category.as_str(),
            ProductFilter::Status => self.status.as_str(),
        }
    }
}

impl Sortable<ProductSortKey> for Product {
    fn sort_value(&self, key: ProductSortKey) -> SortValue<'_> {
        match key {
            ProductSortKey::Name => SortValue::Text(&self.name),
            ProductSortKey::Category => SortValue::Text(self.category.as_str()),
            ProductSortKey::Price => SortValue::numeric_from(&self.price),
            ProductSortKey::Users => SortValue::Number(f64::from(self.users)),
            ProductSortKey::Revenue => SortValue::numeric_from(&self.revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::mock::mock_products;
    use crate::shared::list_view::{derive_view, ListQuery, Selection, SortDirection};

    #[test]
    fn test_price_sort_ignores_currency_formatting() {
        let products = mock_products();
        let query = ListQuery::<ProductFilter, ProductSortKey>::new(ProductSortKey::Price, SortDirection::Descending);

        let view = derive_view(&products, &query);
        assert_eq!(view[0].name, "Enterprise License");
        assert_eq!(view.last().map(|p| p.name.as_str()), Some("Basic Plan"));
    }

    #[test]
    fn test_category_filter() {
        let products = mock_products();
        let query = ListQuery::new(ProductSortKey::Name, SortDirection::Ascending)
            .with_filter(ProductFilter::Category, Selection::Only("Subscription".into()));

        let names: Vec<&str> = derive_view(&products, &query).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Basic Plan", "Premium Plan"]);
    }

    #[test]
    fn test_draft_requires_name_then_price() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.build(6).unwrap_err().to_string(), "Please enter a product name");

        draft.name = "  Team Plan ".to_string();
        assert_eq!(draft.build(6).unwrap_err().to_string(), "Please enter a price");

        draft.price = "$19/month".to_string();
        let product = draft.build(6).unwrap();
        assert_eq!(product.name, "Team Plan");
        assert_eq!(product.users, 0);
        assert_eq!(product.revenue_amount(), 0.0);
    }

    #[test]
    fn test_revenue_amount() {
        let products = mock_products();
        assert_eq!(products[1].revenue_amount(), 854_358.0);
    }
}
