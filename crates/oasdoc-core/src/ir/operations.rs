use indexmap::IndexMap;

use crate::parse::parameter::ParameterOrRef;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;
use crate::parse::security::{SecurityRequirement, SecurityScheme};
use crate::parse::server::Server;
use crate::parse::spec::{ExternalDocs, Info};

/// HTTP method, in the order the catalog walks a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

/// One HTTP method + path combination with merged parameters and a derived
/// summary. Not mutated after the catalog pass completes.
#[derive(Debug, Clone)]
pub struct OperationRecord {
    pub path: String,
    pub method: HttpMethod,
    /// Explicit operation tags, or the single path-derived synthetic tag.
    pub tag_names: Vec<String>,
    pub summary: String,
    pub description: Option<String>,
    pub operation_id: Option<String>,
    /// Path-level common parameters not overridden at the operation level,
    /// followed by all operation-level parameters.
    pub parameters: Vec<ParameterOrRef>,
    pub request_body: Option<RequestBodyOrRef>,
    pub responses: IndexMap<String, ResponseOrRef>,
    /// Path-level servers, extended by operation-level ones.
    pub servers: Vec<Server>,
    pub security: Option<Vec<SecurityRequirement>>,
    pub deprecated: bool,
    pub common_summary: Option<String>,
    pub common_description: Option<String>,
}

/// The grouping of operations under one OpenAPI tag.
#[derive(Debug, Clone)]
pub struct TagBucket {
    pub name: String,
    pub description: String,
    pub operations: Vec<OperationRecord>,
}

/// The normalized operation catalog for a whole spec.
#[derive(Debug, Clone)]
pub struct ApiCatalog {
    pub info: Info,
    pub tags: Vec<TagBucket>,
    pub security_schemes: IndexMap<String, SecurityScheme>,
    pub external_docs: Option<ExternalDocs>,
    pub total_operation_count: usize,
}
