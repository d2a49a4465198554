//! Response records returned by the mock SAP backend.
//!
//! Field declaration order is the order keys appear in the rendered JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named request parameters passed to an RFC call or module fetch.
pub type Params = Map<String, Value>;

// ── SD: sales orders ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrderList {
    pub count: usize,
    pub orders: Vec<SalesOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesOrder {
    pub order_id: String,
    pub customer: String,
    pub date: String,
    pub total_value: f64,
    pub currency: String,
    pub status: String,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub material: String,
    pub qty: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesOrderCreated {
    pub sales_order_id: String,
    pub status: String,
    pub message: String,
}

// ── MM: purchasing and inventory ──────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOrderList {
    pub vendor: String,
    pub orders: Vec<PurchaseOrder>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub po_id: String,
    pub date: String,
    pub amount: u64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryStatus {
    pub material: String,
    pub plant: String,
    pub unrestricted_stock: u32,
    pub unit: String,
    pub storage_location: String,
}

// ── FI: accounting ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountBalance {
    pub company_code: String,
    pub fiscal_year: String,
    pub balance: f64,
    pub currency: String,
    pub as_of_date: String,
}

// ── Generic replies ───────────────────────────────────────────

/// Reply for RFC functions the mock has no dedicated data for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Acknowledgement {
    pub status: String,
    pub message: String,
}

/// Reply for a module code outside SD/MM/FI. A data value, not a fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnknownModule {
    pub error: String,
}

// ── Document intelligence ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentExtraction {
    pub extracted_fields: ExtractedFields,
    pub confidence: f64,
    pub sap_ready_data: SapReadyData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedFields {
    pub customer_number: String,
    pub document_type: String,
    pub amount: String,
    pub date: String,
    pub content_snippet: String,
}

/// Accounting document ready for posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SapReadyData {
    pub header: PostingHeader,
    pub items: Vec<PostingItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostingHeader {
    pub doc_type: String,
    pub comp_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostingItem {
    pub item: u32,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_order_keys_keep_declaration_order() {
        let order = SalesOrder {
            order_id: "SO-1".to_string(),
            customer: "C1".to_string(),
            date: "2024-01-15".to_string(),
            total_value: 5000.0,
            currency: "CNY".to_string(),
            status: "Completed".to_string(),
            items: vec![],
        };
        let json = serde_json::to_string(&order).unwrap();
        let order_id = json.find("order_id").unwrap();
        let customer = json.find("customer").unwrap();
        let items = json.find("items").unwrap();
        assert!(order_id < customer && customer < items);
        assert!(json.contains("\"total_value\":5000.0"));
    }

    #[test]
    fn test_unknown_module_shape() {
        let value = serde_json::to_value(UnknownModule { error: "Unknown module".to_string() }).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Unknown module"}));
    }
}
