/// Errors raised by the mock connector.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// A request parameter could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
