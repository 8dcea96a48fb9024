use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphpaneLegendError {
    #[error("Invalid legend font: {0}")]
    InvalidFontSpec(String),
}
