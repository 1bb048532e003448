use log::warn;

use crate::config::DocConfig;
use crate::ir::{ApiCatalog, HttpMethod, OperationRecord, TagBucket};
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::ParameterOrRef;
use crate::parse::server::Server;
use crate::parse::spec::OpenApiSpec;

/// Walk the spec's path map and build the normalized operation catalog:
/// one `OperationRecord` per path/method pair, grouped into tag buckets,
/// with path-level parameters merged in and missing summaries derived from
/// descriptions.
pub fn build_catalog(spec: &OpenApiSpec, config: &DocConfig) -> ApiCatalog {
    let mut tags: Vec<TagBucket> = Vec::new();
    let mut total_operation_count = 0;

    for (path, item) in &spec.paths {
        for method in HttpMethod::ALL {
            let Some(op) = operation_for(item, method) else {
                continue;
            };

            let record = build_record(path, method, item, op);
            if record.responses.is_empty() {
                warn!("{} {} has no responses", method.as_str(), path);
            }

            for tag_name in &record.tag_names {
                let bucket = bucket_for(&mut tags, tag_name, spec);
                bucket.operations.push(record.clone());
            }
            total_operation_count += 1;
        }
    }

    if config.sort_tags {
        // Stable sort: buckets sharing a name keep first-seen order
        tags.sort_by(|a, b| a.name.cmp(&b.name));
    }

    ApiCatalog {
        info: spec.info.clone(),
        tags,
        security_schemes: spec
            .components
            .as_ref()
            .map(|c| c.security_schemes.clone())
            .unwrap_or_default(),
        external_docs: spec.external_docs.clone(),
        total_operation_count,
    }
}

fn operation_for(item: &PathItem, method: HttpMethod) -> Option<&Operation> {
    match method {
        HttpMethod::Get => item.get.as_ref(),
        HttpMethod::Put => item.put.as_ref(),
        HttpMethod::Post => item.post.as_ref(),
        HttpMethod::Delete => item.delete.as_ref(),
        HttpMethod::Patch => item.patch.as_ref(),
        HttpMethod::Options => item.options.as_ref(),
        HttpMethod::Head => item.head.as_ref(),
    }
}

fn build_record(path: &str, method: HttpMethod, item: &PathItem, op: &Operation) -> OperationRecord {
    let tag_names = if op.tags.is_empty() {
        vec![derive_tag(path)]
    } else {
        op.tags.clone()
    };

    OperationRecord {
        path: path.to_string(),
        method,
        tag_names,
        summary: derive_summary(op.summary.as_deref(), op.description.as_deref()),
        description: op.description.clone(),
        operation_id: op.operation_id.clone(),
        parameters: merge_parameters(&item.parameters, &op.parameters),
        request_body: op.request_body.clone(),
        responses: op.responses.clone(),
        servers: merge_servers(&item.servers, &op.servers),
        security: op.security.clone(),
        deprecated: op.deprecated.unwrap_or(false),
        common_summary: item.summary.clone(),
        common_description: item.description.clone(),
    }
}

fn bucket_for<'a>(
    tags: &'a mut Vec<TagBucket>,
    name: &str,
    spec: &OpenApiSpec,
) -> &'a mut TagBucket {
    if let Some(i) = tags.iter().position(|t| t.name == name) {
        return &mut tags[i];
    }
    let description = spec
        .tags
        .iter()
        .find(|t| t.name == name)
        .and_then(|t| t.description.clone())
        .unwrap_or_default();
    tags.push(TagBucket {
        name: name.to_string(),
        description,
        operations: Vec::new(),
    });
    tags.last_mut().unwrap()
}

/// Path-level common parameters survive unless the operation redefines the
/// same `(name, in)` pair; operation-level parameters always come last.
fn merge_parameters(common: &[ParameterOrRef], op: &[ParameterOrRef]) -> Vec<ParameterOrRef> {
    let mut merged: Vec<ParameterOrRef> = common
        .iter()
        .filter(|c| !op.iter().any(|p| c.same_target(p)))
        .cloned()
        .collect();
    merged.extend(op.iter().cloned());
    merged
}

fn merge_servers(common: &[Server], op: &[Server]) -> Vec<Server> {
    let mut servers = common.to_vec();
    servers.extend(op.iter().cloned());
    servers
}

/// Derive the synthetic tag for an untagged operation: the text between the
/// leading `/` and the next `/`, or the remainder of the path.
fn derive_tag(path: &str) -> String {
    let rest = path.strip_prefix('/').unwrap_or(path);
    match rest.find('/') {
        Some(i) => rest[..i].to_string(),
        None => rest.to_string(),
    }
}

/// An absent summary is derived from the description by cutting at the
/// first newline, `". "`, or `"."` found within the first 100 bytes, in
/// that rule order; with no usable cut point the whole description stands.
fn derive_summary(summary: Option<&str>, description: Option<&str>) -> String {
    if let Some(s) = summary {
        if !s.is_empty() {
            return s.to_string();
        }
    }
    let Some(desc) = description else {
        return String::new();
    };
    match find_cut(desc) {
        Some(i) => desc[..i].to_string(),
        None => desc.to_string(),
    }
}

fn find_cut(desc: &str) -> Option<usize> {
    for pattern in ["\n", ". ", "."] {
        if let Some(i) = desc.find(pattern) {
            if i <= 100 {
                return Some(i);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_passthrough() {
        assert_eq!(derive_summary(Some("Listed"), Some("ignored")), "Listed");
    }

    #[test]
    fn test_summary_unpunctuated_long_description() {
        let desc = "A".repeat(150);
        assert_eq!(derive_summary(None, Some(&desc)), desc);
    }

    #[test]
    fn test_summary_cut_at_newline() {
        assert_eq!(
            derive_summary(None, Some("Short line.\nMore text")),
            "Short line."
        );
    }

    #[test]
    fn test_summary_cut_at_sentence() {
        assert_eq!(
            derive_summary(None, Some("First sentence. Second sentence")),
            "First sentence"
        );
    }

    #[test]
    fn test_summary_cut_point_past_window_ignored() {
        let desc = format!("{}\nrest", "B".repeat(120));
        // Newline sits past the window and there is no period at all
        assert_eq!(derive_summary(None, Some(&desc)), desc);
    }

    #[test]
    fn test_derive_tag_from_path() {
        assert_eq!(derive_tag("/pets/{petId}"), "pets");
        assert_eq!(derive_tag("/store"), "store");
        assert_eq!(derive_tag("/"), "");
    }
}
