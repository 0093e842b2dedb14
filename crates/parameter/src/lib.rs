pub mod catalog;
pub mod def;
pub mod error;
pub mod kind;
pub mod metadata;
pub mod option;
pub mod schema;
pub mod types;
pub mod values;

pub mod prelude {
    pub use crate::catalog::{PropCatalog, PropOverrides};
    pub use crate::def::PropDef;
    pub use crate::error::PropError;
    pub use crate::kind::PropKind;
    pub use crate::metadata::PropMetadata;
    pub use crate::option::SelectOption;
    pub use crate::schema::PropSchema;
    pub use crate::values::ParamValues;

    pub use crate::types::*;
}
