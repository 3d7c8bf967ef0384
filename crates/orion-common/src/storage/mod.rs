//! Object storage collaborator
//!
//! [`FileUpload`] validates and names a file; an [`ObjectStorage`] backend
//! stores the bytes and hands back the public URL.

mod backend;
mod error;
mod upload;

pub use backend::{LocalStorage, MemoryStorage, ObjectStorage};
pub use error::StorageError;
pub use upload::{FileUpload, EXTENSIONES_DOCUMENTOS, EXTENSIONES_NOMBRAMIENTOS};
