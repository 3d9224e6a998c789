use super::aggregate::{Product, ProductCategory, ProductStatus};

fn product(
    id: u32,
    name: &str,
    category: ProductCategory,
    price: &str,
    status: ProductStatus,
    users: u32,
    revenue: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        price: price.to_string(),
        status,
        users,
        revenue: revenue.to_string(),
    }
}

pub fn mock_products() -> Vec<Product> {
    use ProductCategory::*;
    use ProductStatus::*;

    vec![
        product(1, "Premium Plan", Subscription, "$99/month", Active, 1245, "$123,255"),
        product(2, "Enterprise License", License, "$2,499/year", Active, 342, "$854,358"),
        product(3, "Basic Plan", Subscription, "$29/month", Active, 5678, "$164,662"),
        product(4, "Starter Pack", OneTime, "$199", Discontinued, 89, "$17,711"),
        product(5, "Pro Add-on", AddOn, "$49/month", Active, 892, "$43,708"),
    ]
}
