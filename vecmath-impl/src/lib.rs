pub mod math_vector;
pub mod float3;

pub use float3::Float3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Float3Error {
    #[error("Expected a buffer of 3 floats, got {len}")]
    WrongLength { len: usize },
}
