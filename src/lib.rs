#![warn(missing_docs)]

//! Load color themes from `Color.properties` files.

pub use vello::peniko as color;

pub use colorprops_core as core;

/// A "prelude" for users of colorprops.
///
/// ```rust
/// use colorprops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::color::{format_hex_color, parse_hex_color, ColorParseError};
    pub use crate::core::config::{ExecutionMode, LoaderConfig};
    pub use crate::core::error::{ConfigError, ConfigResult, ErrorKind};
    pub use crate::core::properties::PropertyStore;
    pub use crate::core::resource::ResourceFile;
    pub use crate::core::store::{
        ConfigurationProperties, COLOR_PROPERTY_FILE, COLOR_PROPERTY_FILE_INS, COLOR_PROPERTY_NAME,
    };

    // Color
    pub use crate::color::Color;
}
