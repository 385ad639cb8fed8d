//! Descriptor extraction.
//!
//! Turns a basic-tool-interop cartridge XML document into a [`ToolDescriptor`].
//!
//! ## Entry point
//!
//! ```
//! use ltikit_core::extract::extract_descriptor;
//!
//! let xml = r#"<cartridge_basiclti_link xmlns:blti="http://www.imsglobal.org/xsd/imsbasiclti_v1p0">
//!   <blti:title>Khan Academy</blti:title>
//! </cartridge_basiclti_link>"#;
//! let descriptor = extract_descriptor(xml).unwrap();
//! assert_eq!(descriptor.title, "Khan Academy");
//! ```
//!
//! ## Namespace handling
//!
//! Basic-tool-interop elements are matched by namespace URI, whatever prefix
//! the document binds it to. A document that uses the conventional `blti`,
//! `lticm` or `lticp` prefixes without declaring them is re-read with the
//! bindings supplied.

pub mod platform;
pub mod properties;

use crate::catalog::{BLTI_NAMESPACE, RESERVED_PLATFORM};
use crate::errors::{LtiKitError, Result};
use crate::model::{CustomFieldMap, ExtensionBlock, ToolDescriptor};
use roxmltree::{Document, Node, ParsingOptions};

pub use platform::{promote_platform_fields, PromotedFields};
pub use properties::extract_custom_fields;

use properties::node_text;

/// Prefix assumed when a document never binds the basic-tool-interop namespace
pub const DEFAULT_BLTI_PREFIX: &str = "blti";

/// Local name of the top-level cartridge link element
pub const LINK_ELEMENT: &str = "cartridge_basiclti_link";

fn parse_options() -> ParsingOptions {
    ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    }
}

/// Conventional prefixes that cartridges often use without declaring them
const CONVENTIONAL_BINDINGS: [(&str, &str); 3] = [
    (DEFAULT_BLTI_PREFIX, BLTI_NAMESPACE),
    ("lticm", "http://www.imsglobal.org/xsd/imslticm_v1p0"),
    ("lticp", "http://www.imsglobal.org/xsd/imslticp_v1p0"),
];

/// Insert `xmlns:<prefix>="<uri>"` into the first start tag.
fn bind_prefix(xml: &str, prefix: &str, uri: &str) -> Option<String> {
    let mut search_from = 0;
    while let Some(offset) = xml[search_from..].find('<') {
        let start = search_from + offset;
        let rest = &xml[start + 1..];
        match rest.chars().next() {
            Some('?') | Some('!') | Some('/') | None => search_from = start + 1,
            Some(_) => {
                let name_len = rest
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(rest.len());
                let insert_at = start + 1 + name_len;
                let mut patched = String::with_capacity(xml.len() + prefix.len() + uri.len() + 12);
                patched.push_str(&xml[..insert_at]);
                patched.push_str(&format!(" xmlns:{}=\"{}\"", prefix, uri));
                patched.push_str(&xml[insert_at..]);
                return Some(patched);
            }
        }
    }
    None
}

fn invalid_xml(e: roxmltree::Error) -> LtiKitError {
    LtiKitError::InvalidXml {
        reason: e.to_string(),
    }
}

/// Supply bindings for conventional prefixes until the document parses or
/// fails for another reason. Returns the (possibly patched) source text.
fn with_conventional_bindings(xml: &str) -> Result<String> {
    let mut source = xml.to_string();
    for _ in 0..CONVENTIONAL_BINDINGS.len() {
        match Document::parse_with_options(&source, parse_options()) {
            Ok(_) => return Ok(source),
            Err(roxmltree::Error::UnknownNamespace(prefix, _)) => {
                let (prefix, uri) = CONVENTIONAL_BINDINGS
                    .iter()
                    .find(|(p, _)| *p == prefix)
                    .ok_or_else(|| LtiKitError::InvalidXml {
                        reason: format!("unknown namespace prefix '{}'", prefix),
                    })?;
                tracing::debug!(prefix = %prefix, "binding undeclared conventional prefix");
                source = bind_prefix(&source, prefix, uri).ok_or(LtiKitError::MalformedDescriptor)?;
            }
            Err(e) => return Err(invalid_xml(e)),
        }
    }
    Ok(source)
}

/// Prefix the element binds to the basic-tool-interop namespace, or the
/// conventional default when no binding is declared.
pub fn resolve_blti_prefix(node: Node<'_, '_>) -> String {
    node.namespaces()
        .find(|ns| ns.uri() == BLTI_NAMESPACE)
        .and_then(|ns| ns.name())
        .unwrap_or(DEFAULT_BLTI_PREFIX)
        .to_string()
}

/// Namespace URI that basic-tool-interop elements under `link` carry.
///
/// Normally the canonical URI. When the document binds the resolved prefix
/// to some other URI (a trailing slash, a version suffix), elements under
/// that prefix are accepted as well.
fn blti_uri(link: Node<'_, '_>) -> String {
    if link.namespaces().any(|ns| ns.uri() == BLTI_NAMESPACE) {
        return BLTI_NAMESPACE.to_string();
    }
    let prefix = resolve_blti_prefix(link);
    link.lookup_namespace_uri(Some(prefix.as_str()))
        .unwrap_or(BLTI_NAMESPACE)
        .to_string()
}

fn is_blti(node: &Node<'_, '_>, uri: &str, local: &str) -> bool {
    node.is_element() && node.tag_name().name() == local && node.tag_name().namespace() == Some(uri)
}

fn blti_child<'a, 'input>(link: Node<'a, 'input>, uri: &str, local: &str) -> Option<Node<'a, 'input>> {
    link.children().find(|c| is_blti(c, uri, local))
}

fn blti_text(link: Node<'_, '_>, uri: &str, local: &str) -> Option<String> {
    blti_child(link, uri, local).map(node_text)
}

/// Parse a cartridge document into a [`ToolDescriptor`].
///
/// # Errors
///
/// - `InvalidXml`: the document is not well-formed
/// - `MalformedDescriptor`: no `cartridge_basiclti_link` element
/// - `MissingTitle`: the link element has no `title` child
pub fn extract_descriptor(xml: &str) -> Result<ToolDescriptor> {
    let patched;
    let doc = match Document::parse_with_options(xml, parse_options()) {
        Ok(doc) => doc,
        Err(roxmltree::Error::UnknownNamespace(..)) => {
            patched = with_conventional_bindings(xml)?;
            Document::parse_with_options(&patched, parse_options()).map_err(invalid_xml)?
        }
        Err(e) => return Err(invalid_xml(e)),
    };

    let link = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == LINK_ELEMENT)
        .ok_or(LtiKitError::MalformedDescriptor)?;

    descriptor_from_link(link)
}

fn descriptor_from_link(link: Node<'_, '_>) -> Result<ToolDescriptor> {
    let uri = blti_uri(link);
    tracing::debug!(prefix = %resolve_blti_prefix(link), uri = %uri, "resolved blti namespace");

    let title = blti_text(link, &uri, "title").ok_or(LtiKitError::MissingTitle)?;

    let mut descriptor = ToolDescriptor::new(title);
    descriptor.description = blti_text(link, &uri, "description");
    descriptor.launch_url = blti_text(link, &uri, "secure_launch_url")
        .or_else(|| blti_text(link, &uri, "launch_url"));
    descriptor.custom_fields = blti_child(link, &uri, "custom")
        .map(extract_custom_fields)
        .unwrap_or_default();

    for extension in link.children().filter(|c| is_blti(c, &uri, "extensions")) {
        let block = ExtensionBlock {
            platform: extension.attribute("platform").unwrap_or_default().to_string(),
            custom_fields: extract_custom_fields(extension),
        };

        if block.platform == RESERVED_PLATFORM {
            let (promoted, settings) = promote_platform_fields(&block.custom_fields);
            descriptor.privacy_level = promoted.privacy_level;
            descriptor.domain = promoted.domain;
            descriptor.consumer_key = promoted.consumer_key;
            descriptor.shared_secret = promoted.shared_secret;
            descriptor.tool_id = promoted.tool_id;
            descriptor.assignment_points_possible = promoted.assignment_points_possible;
            descriptor.platform_settings = Some(settings);
        } else {
            tracing::debug!(platform = %block.platform, "keeping opaque extension block");
            descriptor.extensions.push(block);
        }
    }

    if let Some(icon) = blti_text(link, &uri, "icon") {
        descriptor
            .platform_settings
            .get_or_insert_with(CustomFieldMap::new)
            .insert_text("icon_url", icon);
    }

    Ok(descriptor)
}
