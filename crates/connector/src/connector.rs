use sapsim_core::{
    AccountBalance, Acknowledgement, ConnectorConfig, InventoryStatus, LatencyConfig, Params,
    PurchaseOrderList, SalesOrderCreated, SalesOrderList, UnknownModule,
};
use serde::Serialize;
use tracing::info;

use crate::error::ConnectorError;
use crate::mock::MockData;
use crate::rfc::{RfcFunction, SapModule};

/// Reply to an RFC invocation.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RfcResponse {
    SalesOrderCreated(SalesOrderCreated),
    Inventory(InventoryStatus),
    Acknowledged(Acknowledgement),
}

/// Reply to a module data fetch.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FetchResponse {
    SalesOrders(SalesOrderList),
    PurchaseOrders(PurchaseOrderList),
    AccountBalance(AccountBalance),
    UnknownModule(UnknownModule),
}

impl FetchResponse {
    pub fn unknown_module() -> Self {
        Self::UnknownModule(UnknownModule {
            error: "Unknown module".to_string(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::UnknownModule(_))
    }
}

/// Connector that simulates an SAP system.
///
/// Holds only immutable configuration, so one instance can be shared behind
/// an `Arc` and called concurrently. Each call waits out the configured
/// latency on the tokio timer; dropping the future abandons the wait.
#[derive(Debug, Clone)]
pub struct MockConnector {
    config: ConnectorConfig,
    latency: LatencyConfig,
}

impl MockConnector {
    pub fn new(config: ConnectorConfig, latency: LatencyConfig) -> Self {
        info!(ashost = %config.ashost, client = %config.client, "mock SAP connector ready");
        Self { config, latency }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn latency(&self) -> LatencyConfig {
        self.latency
    }

    /// Call a function module by name. Unknown names are acknowledged, not rejected.
    pub async fn invoke(&self, function: &str, params: &Params) -> Result<RfcResponse, ConnectorError> {
        self.invoke_function(RfcFunction::from_name(function), params).await
    }

    pub async fn invoke_function(
        &self,
        function: RfcFunction,
        params: &Params,
    ) -> Result<RfcResponse, ConnectorError> {
        info!(rfc = %function, ?params, "Simulating RFC call");
        tokio::time::sleep(self.latency.rfc()).await;

        let response = match function {
            RfcFunction::CreateSalesOrderFromData2 => {
                RfcResponse::SalesOrderCreated(MockData::create_sales_order(params)?)
            }
            RfcFunction::MaterialGetAll => RfcResponse::Inventory(MockData::inventory(params)),
            RfcFunction::Other(name) => RfcResponse::Acknowledged(Acknowledgement {
                status: "OK".to_string(),
                message: format!("Simulated call to {name} successful"),
            }),
        };
        Ok(response)
    }

    /// Fetch module data by module code. Unknown codes yield `{"error": "Unknown module"}`.
    pub async fn fetch(&self, module: &str, query: &Params) -> FetchResponse {
        info!(module, ?query, "Simulating data fetch");
        tokio::time::sleep(self.latency.fetch()).await;

        match SapModule::from_code(module) {
            Some(module) => Self::module_data(module, query),
            None => {
                tracing::warn!(module, "unknown module code");
                FetchResponse::unknown_module()
            }
        }
    }

    pub async fn fetch_module(&self, module: SapModule, query: &Params) -> FetchResponse {
        self.fetch(module.code(), query).await
    }

    fn module_data(module: SapModule, query: &Params) -> FetchResponse {
        match module {
            SapModule::SalesAndDistribution => FetchResponse::SalesOrders(MockData::sales_orders(query)),
            SapModule::MaterialsManagement => {
                FetchResponse::PurchaseOrders(MockData::purchase_orders(query))
            }
            SapModule::FinancialAccounting => {
                FetchResponse::AccountBalance(MockData::account_balance(query))
            }
        }
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new(ConnectorConfig::default(), LatencyConfig::default())
    }
}
