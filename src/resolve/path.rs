//! Dotted path traversal through argument values

use crate::config::TemplateConfig;
use crate::error::ResolveError;
use crate::value::Value;

/// Kind of collection a projection was taken over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Array,
    Iterable,
}

/// Result of a successful path walk
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'v> {
    /// A single value reached by the path
    Value(&'v Value),
    /// The rest of the path applied to every element of a collection
    Projection {
        kind: SequenceKind,
        items: Vec<Resolved<'v>>,
    },
}

/// Walk `segments[1..]` starting from `root`
///
/// `segments[0]` names the root itself and is only used for error paths.
/// Each later segment is a record field or map key. When the walk meets an
/// array or list while segments remain, the remaining segments are applied
/// to every element and the results collected into a projection; with
/// [`TemplateConfig::index_access`] a numeric segment selects one element
/// instead.
pub fn resolve_path<'v>(
    config: &TemplateConfig,
    segments: &[&str],
    root: &'v Value,
) -> Result<Resolved<'v>, ResolveError> {
    descend(config, segments, 1, root)
}

fn descend<'v>(
    config: &TemplateConfig,
    segments: &[&str],
    start: usize,
    value: &'v Value,
) -> Result<Resolved<'v>, ResolveError> {
    let mut current = value;
    for (i, segment) in segments.iter().enumerate().skip(start) {
        if let Some(elements) = current.elements() {
            if let Some(index) = numeric_index(config, segment) {
                current = elements
                    .get(index)
                    .ok_or_else(|| ResolveError::field_not_found(segments, i))?;
                continue;
            }
            let kind = match current {
                Value::Array(_) => SequenceKind::Array,
                _ => SequenceKind::Iterable,
            };
            let items = elements
                .iter()
                .map(|element| descend(config, segments, i, element))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Resolved::Projection { kind, items });
        }
        current = current
            .lookup(segment)
            .ok_or_else(|| ResolveError::field_not_found(segments, i))?;
    }
    Ok(Resolved::Value(current))
}

fn numeric_index(config: &TemplateConfig, segment: &str) -> Option<usize> {
    if !config.index_access {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;
    use pretty_assertions::assert_eq;

    fn user(name: &str, city: &str) -> Value {
        Record::new("User")
            .with_field("name", name)
            .with_field("address", Record::new("Address").with_field("city", city))
            .into()
    }

    #[test]
    fn test_root_only_path() {
        let config = TemplateConfig::default();
        let root = Value::from("alice");
        assert_eq!(
            resolve_path(&config, &["username"], &root),
            Ok(Resolved::Value(&root))
        );
    }

    #[test]
    fn test_nested_record_fields() {
        let config = TemplateConfig::default();
        let root = user("alice", "Paris");
        assert_eq!(
            resolve_path(&config, &["user", "address", "city"], &root),
            Ok(Resolved::Value(&Value::from("Paris")))
        );
    }

    #[test]
    fn test_map_key_lookup() {
        let config = TemplateConfig::default();
        let root = Value::map([("region", Value::map([("code", "EU")]))]);
        assert_eq!(
            resolve_path(&config, &["m", "region", "code"], &root),
            Ok(Resolved::Value(&Value::from("EU")))
        );
    }

    #[test]
    fn test_missing_field_reports_path() {
        let config = TemplateConfig::default();
        let root: Value = Record::new("User").with_field("name", "alice").into();
        let err = resolve_path(&config, &["user", "address", "city"], &root).unwrap_err();
        assert_eq!(
            err,
            ResolveError::FieldNotFound {
                path: "user.address".to_string(),
                segment: "address".to_string(),
            }
        );
    }

    #[test]
    fn test_scalar_and_null_have_no_fields() {
        let config = TemplateConfig::default();
        assert!(resolve_path(&config, &["a", "len"], &Value::from("text")).is_err());
        assert!(resolve_path(&config, &["a", "x"], &Value::Null).is_err());
    }

    #[test]
    fn test_projection_over_list() {
        let config = TemplateConfig::default();
        let root = Value::list([user("alice", "Paris"), user("bob", "Oslo")]);
        let resolved = resolve_path(&config, &["users", "address", "city"], &root).unwrap();
        assert_eq!(
            resolved,
            Resolved::Projection {
                kind: SequenceKind::Iterable,
                items: vec![
                    Resolved::Value(&Value::from("Paris")),
                    Resolved::Value(&Value::from("Oslo")),
                ],
            }
        );
    }

    #[test]
    fn test_projection_failure_fails_whole_path() {
        let config = TemplateConfig::default();
        let root = Value::array([user("alice", "Paris"), Value::from("not a user")]);
        let err = resolve_path(&config, &["users", "name"], &root).unwrap_err();
        assert_eq!(err.path(), "users.name");
    }

    #[test]
    fn test_numeric_segment_without_index_access_projects() {
        let config = TemplateConfig::default();
        let root = Value::list([Value::list(["a"])]);
        // "0" is looked up as a key on each element, which lists cannot answer
        let resolved = resolve_path(&config, &["xs", "0"], &root);
        assert!(resolved.is_err());
    }

    #[test]
    fn test_index_access() {
        let config = TemplateConfig::default().with_index_access(true);
        let root = Value::array([user("alice", "Paris"), user("bob", "Oslo")]);
        assert_eq!(
            resolve_path(&config, &["users", "1", "name"], &root),
            Ok(Resolved::Value(&Value::from("bob")))
        );
        let err = resolve_path(&config, &["users", "5", "name"], &root).unwrap_err();
        assert_eq!(err.path(), "users.5");
    }
}
