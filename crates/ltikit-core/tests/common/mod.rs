use ltikit_core::catalog::ExtensionKind;
use ltikit_core::model::{ConfigOption, ToolRecord};
use std::collections::BTreeMap;

pub const HOST: &str = "https://apps.example.edu";

pub const BLTI_NS: &str = "http://www.imsglobal.org/xsd/imsbasiclti_v1p0";
pub const LTICM_NS: &str = "http://www.imsglobal.org/xsd/imslticm_v1p0";

/// A representative cartridge: declared namespaces, secure launch URL,
/// custom fields, the reserved platform block and one foreign extension.
#[allow(dead_code)]
pub fn sample_cartridge() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cartridge_basiclti_link xmlns="http://www.imsglobal.org/xsd/imslticc_v1p0"
    xmlns:blti="{blti}" xmlns:lticm="{lticm}">
  <blti:title>Khan Academy</blti:title>
  <blti:description>Videos &amp; exercises</blti:description>
  <blti:launch_url>http://khan.example/launch</blti:launch_url>
  <blti:secure_launch_url>https://khan.example/launch</blti:secure_launch_url>
  <blti:icon>https://khan.example/icon.png</blti:icon>
  <blti:custom>
    <lticm:property name="subject">math</lticm:property>
  </blti:custom>
  <blti:extensions platform="canvas.instructure.com">
    <lticm:property name="privacy_level">public</lticm:property>
    <lticm:property name="domain">x.edu</lticm:property>
    <lticm:property name="outcome">10.5</lticm:property>
    <lticm:property name="shared_secret">s3cret</lticm:property>
    <lticm:options name="course_navigation">
      <lticm:property name="url">https://khan.example/nav</lticm:property>
      <lticm:property name="text">Khan Nav</lticm:property>
    </lticm:options>
  </blti:extensions>
  <blti:extensions platform="other.lms">
    <lticm:property name="color">blue</lticm:property>
  </blti:extensions>
</cartridge_basiclti_link>"#,
        blti = BLTI_NS,
        lticm = LTICM_NS
    )
}

#[allow(dead_code)]
pub fn record(id: &str, name: &str) -> ToolRecord {
    ToolRecord::new(id, name)
}

#[allow(dead_code)]
pub fn record_with_extensions(id: &str, extensions: &[ExtensionKind]) -> ToolRecord {
    let mut record = ToolRecord::new(id, "Tool");
    record.extensions = extensions.to_vec();
    record
}

#[allow(dead_code)]
pub fn option(name: &str, value: &str) -> ConfigOption {
    ConfigOption::new(name, value)
}

#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
