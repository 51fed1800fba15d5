use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        DashboardError::Parse(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        DashboardError::Render(msg.into())
    }
}
