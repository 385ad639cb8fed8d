use ltikit_core::errors::{ExError, ExErrorKind};
use ltikit_fetch::DescriptorSource;

pub const BLTI_NS: &str = "http://www.imsglobal.org/xsd/imsbasiclti_v1p0";

/// Source serving a fixed document for any location
pub struct StaticSource(pub String);

impl DescriptorSource for StaticSource {
    fn fetch(&self, _location: &str) -> ltikit_fetch::Result<String> {
        Ok(self.0.clone())
    }
}

/// Source that always fails with the given kind
pub struct FailingSource(pub ExErrorKind);

impl DescriptorSource for FailingSource {
    fn fetch(&self, location: &str) -> ltikit_fetch::Result<String> {
        Err(ExError::new(self.0)
            .with_op("fetch")
            .with_entity_id(location)
            .with_message("stubbed failure"))
    }
}

#[allow(dead_code)]
pub fn cartridge(title: &str) -> String {
    format!(
        r#"<cartridge_basiclti_link xmlns:blti="{ns}" xmlns:lticm="http://www.imsglobal.org/xsd/imslticm_v1p0">
  <blti:title>{title}</blti:title>
  <blti:launch_url>https://tool.example/launch</blti:launch_url>
  <blti:extensions platform="canvas.instructure.com">
    <lticm:property name="privacy_level">name_only</lticm:property>
    <lticm:options name="course_navigation">
      <lticm:property name="url">https://tool.example/nav</lticm:property>
      <lticm:property name="text">Nav</lticm:property>
    </lticm:options>
  </blti:extensions>
</cartridge_basiclti_link>"#,
        ns = BLTI_NS,
        title = title
    )
}
