use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("The surface has no open page; call start_new_page first.")]
    NoOpenPage,
    #[error("Unknown background pattern '{0}'.")]
    UnknownPattern(String),
    #[error("Generic render error: {0}")]
    Generic(String),
}
