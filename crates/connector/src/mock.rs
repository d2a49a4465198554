//! Fixed demo datasets. Every generator is a pure function of its parameters.

use sapsim_core::{
    AccountBalance, InventoryStatus, OrderItem, Params, PurchaseOrder, PurchaseOrderList,
    SalesOrder, SalesOrderCreated, SalesOrderList,
};
use serde_json::Value;

use crate::error::ConnectorError;

/// Offset added to the customer suffix to form a new sales order number.
const SALES_ORDER_BASE: u64 = 90_000;

/// Materials whose id contains this marker are in stock.
const STOCKED_MATERIAL_MARKER: &str = "100";
const STOCKED_QUANTITY: u32 = 150;

pub struct MockData;

impl MockData {
    /// SD: the two most recent sales orders of a customer.
    pub fn sales_orders(query: &Params) -> SalesOrderList {
        let customer = param(query, "customer_number", "UNKNOWN");
        let orders = vec![
            SalesOrder {
                order_id: "SO-2024001".to_string(),
                customer: customer.clone(),
                date: "2024-01-15".to_string(),
                total_value: 5000.00,
                currency: "CNY".to_string(),
                status: "Completed".to_string(),
                items: vec![item("M-100", 10), item("M-200", 5)],
            },
            SalesOrder {
                order_id: "SO-2024005".to_string(),
                customer,
                date: "2024-02-01".to_string(),
                total_value: 12000.50,
                currency: "CNY".to_string(),
                status: "Processing".to_string(),
                items: vec![item("M-300", 20)],
            },
        ];
        SalesOrderList {
            count: orders.len(),
            orders,
        }
    }

    /// BAPI_SALESORDER_CREATEFROMDAT2: derives the new order number from the
    /// last four characters of the customer id.
    pub fn create_sales_order(params: &Params) -> Result<SalesOrderCreated, ConnectorError> {
        let customer_id = param(params, "customer_id", "0");
        let suffix = last_chars(&customer_id, 4);
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConnectorError::InvalidInput(format!(
                "customer_id '{customer_id}' must end in up to four digits, got suffix '{suffix}'"
            )));
        }
        // At most four ASCII digits, so this cannot overflow.
        let number: u64 = suffix
            .parse()
            .map_err(|e| ConnectorError::InvalidInput(format!("customer_id suffix '{suffix}': {e}")))?;

        Ok(SalesOrderCreated {
            sales_order_id: format!("SO-{}", number + SALES_ORDER_BASE),
            status: "Created".to_string(),
            message: "Sales order created successfully".to_string(),
        })
    }

    /// MM: open and delivered purchase orders of a vendor.
    pub fn purchase_orders(query: &Params) -> PurchaseOrderList {
        PurchaseOrderList {
            vendor: param(query, "vendor_number", "V-001"),
            orders: vec![
                PurchaseOrder {
                    po_id: "PO-88001".to_string(),
                    date: "2024-01-10".to_string(),
                    amount: 3000,
                    status: "Delivered".to_string(),
                },
                PurchaseOrder {
                    po_id: "PO-88005".to_string(),
                    date: "2024-02-02".to_string(),
                    amount: 4500,
                    status: "Approved".to_string(),
                },
            ],
        }
    }

    /// BAPI_MATERIAL_GET_ALL: unrestricted stock of a material at a plant.
    pub fn inventory(params: &Params) -> InventoryStatus {
        let material = param(params, "material_number", "M-UNKNOWN");
        let plant = param(params, "plant", "1000");
        let unrestricted_stock = if material.contains(STOCKED_MATERIAL_MARKER) {
            STOCKED_QUANTITY
        } else {
            0
        };

        InventoryStatus {
            material,
            plant,
            unrestricted_stock,
            unit: "PC".to_string(),
            storage_location: "0001".to_string(),
        }
    }

    /// FI: G/L balance of a company code for a fiscal year.
    pub fn account_balance(query: &Params) -> AccountBalance {
        AccountBalance {
            company_code: param(query, "company_code", "1000"),
            fiscal_year: param(query, "fiscal_year", "2024"),
            balance: 1_500_000.00,
            currency: "CNY".to_string(),
            as_of_date: "2024-02-06".to_string(),
        }
    }
}

fn item(material: &str, qty: u32) -> OrderItem {
    OrderItem {
        material: material.to_string(),
        qty,
    }
}

/// Read a parameter as text. Missing and null values take the default;
/// non-string scalars use their JSON rendering.
fn param(params: &Params, key: &str, default: &str) -> String {
    match params.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// The trailing `n` characters of `s` (all of it when shorter).
fn last_chars(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &s[idx..],
        Some(_) => "",
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_sales_orders_echo_customer() {
        let list = MockData::sales_orders(&params(json!({"customer_number": "C1001"})));
        assert_eq!(list.count, 2);
        assert_eq!(list.orders.len(), 2);
        assert!(list.orders.iter().all(|o| o.customer == "C1001"));
        assert_eq!(list.orders[0].items.len(), 2);
        assert_eq!(list.orders[1].total_value, 12000.50);
    }

    #[test]
    fn test_sales_orders_default_customer() {
        let list = MockData::sales_orders(&params(json!({"customer_number": null})));
        assert_eq!(list.orders[0].customer, "UNKNOWN");
    }

    #[test]
    fn test_create_sales_order_from_suffix() {
        let created =
            MockData::create_sales_order(&params(json!({"customer_id": "C1001"}))).unwrap();
        assert_eq!(created.sales_order_id, "SO-91001");
        assert_eq!(created.status, "Created");
    }

    #[test]
    fn test_create_sales_order_short_and_default_ids() {
        let short = MockData::create_sales_order(&params(json!({"customer_id": "42"}))).unwrap();
        assert_eq!(short.sales_order_id, "SO-90042");

        let missing = MockData::create_sales_order(&Params::new()).unwrap();
        assert_eq!(missing.sales_order_id, "SO-90000");
    }

    #[test]
    fn test_create_sales_order_rejects_non_digit_suffix() {
        for id in ["CUST-A", "C10X1", "", "C-12"] {
            let err = MockData::create_sales_order(&params(json!({"customer_id": id})))
                .unwrap_err();
            assert!(matches!(err, ConnectorError::InvalidInput(_)), "{id}");
        }
    }

    #[test]
    fn test_inventory_stock_rule() {
        let stocked = MockData::inventory(&params(json!({"material_number": "M-100", "plant": "2000"})));
        assert_eq!(stocked.unrestricted_stock, 150);
        assert_eq!(stocked.plant, "2000");

        let empty = MockData::inventory(&params(json!({"material_number": "M-999"})));
        assert_eq!(empty.unrestricted_stock, 0);
        assert_eq!(empty.plant, "1000");
        assert_eq!(empty.unit, "PC");
        assert_eq!(empty.storage_location, "0001");
    }

    #[test]
    fn test_inventory_defaults() {
        let status = MockData::inventory(&Params::new());
        assert_eq!(status.material, "M-UNKNOWN");
        assert_eq!(status.unrestricted_stock, 0);
    }

    #[test]
    fn test_purchase_orders_and_balance_defaults() {
        let pos = MockData::purchase_orders(&Params::new());
        assert_eq!(pos.vendor, "V-001");
        assert_eq!(pos.orders[1].po_id, "PO-88005");

        let balance = MockData::account_balance(&params(json!({"fiscal_year": 2023})));
        assert_eq!(balance.company_code, "1000");
        assert_eq!(balance.fiscal_year, "2023");
        assert_eq!(balance.balance, 1_500_000.00);
    }

    #[test]
    fn test_last_chars() {
        assert_eq!(last_chars("C1001", 4), "1001");
        assert_eq!(last_chars("12", 4), "12");
        assert_eq!(last_chars("", 4), "");
        assert_eq!(last_chars("客户1234", 4), "1234");
        assert_eq!(last_chars("号码", 4), "号码");
    }
}
