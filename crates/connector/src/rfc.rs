use std::fmt;

/// Remote function modules the mock backend knows how to answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RfcFunction {
    /// `BAPI_SALESORDER_CREATEFROMDAT2`
    CreateSalesOrderFromData2,
    /// `BAPI_MATERIAL_GET_ALL`
    MaterialGetAll,
    /// Any other function name. Answered with a generic acknowledgement.
    Other(String),
}

impl RfcFunction {
    pub const CREATE_SALES_ORDER: &'static str = "BAPI_SALESORDER_CREATEFROMDAT2";
    pub const MATERIAL_GET_ALL: &'static str = "BAPI_MATERIAL_GET_ALL";

    /// Resolve a function module name. Never fails: unknown names map to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name {
            Self::CREATE_SALES_ORDER => Self::CreateSalesOrderFromData2,
            Self::MATERIAL_GET_ALL => Self::MaterialGetAll,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::CreateSalesOrderFromData2 => Self::CREATE_SALES_ORDER,
            Self::MaterialGetAll => Self::MATERIAL_GET_ALL,
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for RfcFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application module a data fetch is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SapModule {
    /// SD
    SalesAndDistribution,
    /// MM
    MaterialsManagement,
    /// FI
    FinancialAccounting,
}

impl SapModule {
    pub const ALL: [SapModule; 3] = [
        SapModule::SalesAndDistribution,
        SapModule::MaterialsManagement,
        SapModule::FinancialAccounting,
    ];

    /// Parse a two-letter module code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SD" => Some(Self::SalesAndDistribution),
            "MM" => Some(Self::MaterialsManagement),
            "FI" => Some(Self::FinancialAccounting),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::SalesAndDistribution => "SD",
            Self::MaterialsManagement => "MM",
            Self::FinancialAccounting => "FI",
        }
    }
}

impl fmt::Display for SapModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_function_names() {
        assert_eq!(
            RfcFunction::from_name("BAPI_SALESORDER_CREATEFROMDAT2"),
            RfcFunction::CreateSalesOrderFromData2
        );
        assert_eq!(
            RfcFunction::from_name("BAPI_MATERIAL_GET_ALL"),
            RfcFunction::MaterialGetAll
        );
    }

    #[test]
    fn test_unknown_function_name_is_kept() {
        let func = RfcFunction::from_name("BAPI_CUSTOMER_GETLIST");
        assert_eq!(func, RfcFunction::Other("BAPI_CUSTOMER_GETLIST".to_string()));
        assert_eq!(func.to_string(), "BAPI_CUSTOMER_GETLIST");
    }

    #[test]
    fn test_module_codes() {
        for module in SapModule::ALL {
            assert_eq!(SapModule::from_code(module.code()), Some(module));
        }
        assert_eq!(SapModule::from_code("sd"), None);
        assert_eq!(SapModule::from_code("HR"), None);
    }
}
