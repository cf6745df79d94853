use thiserror::Error;
use wisp_core::CellPos;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("cell {0} is not a container")]
    NotAContainer(CellPos),
}

pub type WorldResult<T> = Result<T, WorldError>;
