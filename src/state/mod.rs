pub mod chroma_state;
pub mod store;

pub use chroma_state::{ChromaState, ChromaStatus, KindStatus};
pub use store::ResultStore;
