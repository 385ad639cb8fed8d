pub mod custom_fields;
pub mod descriptor;
pub mod launch;
pub mod record;
pub mod tree;

pub use custom_fields::{CustomFieldMap, CustomFieldValue, NESTED_CUSTOM_KEY};
pub use descriptor::{ExtensionBlock, ToolDescriptor};
pub use launch::{LaunchConfiguration, Placement};
pub use record::{ConfigOption, ConfigUrl, ExtensionSettings, Preview, ToolRecord};
pub use tree::Tree;
