pub mod documentation;
pub mod error;
pub mod project;
pub mod reflection;

pub use documentation::{AnchorIdMap, CodeExample, DocumentationJson};
pub use error::{DocgenError, Result};
pub use project::{ProjectDescriptor, ProjectType};
pub use reflection::{ReflectionDocument, ReflectionNode, Signature, TypeRef};
