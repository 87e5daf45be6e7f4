//! Scalar codec for wide-column gateways: parses client values into typed
//! native values, formats them as statement literals, and decodes stored
//! values back for clients.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod codec;
pub mod descriptor;
pub mod error;
pub mod types;
pub mod value;

pub use cqlcodec_config as config;
pub use cqlcodec_primitives as primitives;

///
/// Prelude
///
/// Prelude contains the codec and its value vocabulary.
///

pub mod prelude {
    pub use crate::{
        codec::Codec,
        descriptor::TypeDescriptor,
        error::{CodecError, ErrorKind},
        value::{ExternalValue, NativeValue, QueryLiteral},
    };
    pub use cqlcodec_config::CodecConfig;
    pub use cqlcodec_primitives::ColumnType;
}
