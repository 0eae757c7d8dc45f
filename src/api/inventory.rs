//! Enhanced Inventory Endpoints

use serde::{Deserialize, Serialize};

use super::{get_data, mutate, query_string, ApiResult};
use crate::config::AppConfig;
use crate::models::InventoryItem;

/// Server-side list filters; empty fields are omitted from the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    pub category: String,
    pub brand: String,
    pub search: String,
}

impl InventoryFilter {
    pub fn to_query(&self) -> String {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if !self.category.is_empty() {
            params.push(("category", &self.category));
        }
        if !self.brand.is_empty() {
            params.push(("brand", &self.brand));
        }
        if !self.search.is_empty() {
            params.push(("search", &self.search));
        }
        query_string(&params)
    }
}

/// Filter dropdown options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryOptions {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
}

pub async fn list_inventory_items(
    config: &AppConfig,
    filter: &InventoryFilter,
) -> ApiResult<Vec<InventoryItem>> {
    let path = format!("/api/enhanced-inventory/items{}", filter.to_query());
    get_data(config, &path).await
}

pub async fn inventory_categories(config: &AppConfig) -> ApiResult<CategoryOptions> {
    get_data(config, "/api/enhanced-inventory/categories").await
}

pub async fn expiring_items(config: &AppConfig, days_ahead: u32) -> ApiResult<Vec<InventoryItem>> {
    let days = days_ahead.to_string();
    let path = format!(
        "/api/enhanced-inventory/expiring{}",
        query_string(&[("daysAhead", &days)])
    );
    get_data(config, &path).await
}

/// Writable fields of an inventory item. Dates travel as `YYYY-MM-DD`
/// strings straight from the form's date inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub generic_name: String,
    pub category: String,
    pub subcategory: String,
    pub subsubcategory: String,
    pub category_level4: String,
    pub category_level5: String,
    pub category_level6: String,
    pub category_level7: String,
    pub brand: String,
    pub manufacturer: String,
    pub quantity: u32,
    pub unit: String,
    pub delivery_date: String,
    pub expiration_date: String,
    pub manufacturing_date: String,
    pub batch_number: String,
    pub serial_number: String,
    pub sku: String,
    pub barcode: String,
    pub cost: f64,
    pub supplier: String,
    pub supplier_contact: String,
    pub storage_location: String,
    pub storage_conditions: String,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub reorder_point: u32,
    pub description: String,
    pub notes: String,
}

pub async fn create_inventory_item(config: &AppConfig, payload: &ItemPayload) -> ApiResult<()> {
    mutate(config, "POST", "/api/enhanced-inventory/items", Some(payload)).await
}

pub async fn update_inventory_item(
    config: &AppConfig,
    id: &str,
    payload: &ItemPayload,
) -> ApiResult<()> {
    mutate(
        config,
        "PUT",
        &format!("/api/enhanced-inventory/items/{id}"),
        Some(payload),
    )
    .await
}

pub async fn delete_inventory_item(config: &AppConfig, id: &str) -> ApiResult<()> {
    mutate::<()>(
        config,
        "DELETE",
        &format!("/api/enhanced-inventory/items/{id}"),
        None,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_omits_empty_fields() {
        let filter = InventoryFilter::default();
        assert_eq!(filter.to_query(), "");

        let filter = InventoryFilter {
            category: "Medicine".to_string(),
            brand: String::new(),
            search: "paracetamol".to_string(),
        };
        assert_eq!(filter.to_query(), "?category=Medicine&search=paracetamol");
    }
}
