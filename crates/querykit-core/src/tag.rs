use crate::error::{QueryError, Result};
use crate::merge::merge;
use crate::op::{OpMode, Operation, Resolved, split_marker};
use crate::resolve::{Resolution, Resolver};
use crate::serialize::{Leading, serialize};
use crate::state::QueryState;

/// Keyword that flips the leading separator to `&`.
const APPEND_KEYWORD: &str = "append";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgValue {
    Literal(String),
    /// `None`/`null`: an explicit unset.
    Null,
    /// Resolved through the caller's context at render time.
    Reference(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TagArg {
    key: String,
    mode: OpMode,
    value: ArgValue,
}

/// Parsed form of the caller-facing operation tokens. Parsing happens once;
/// rendering resolves references and runs merge + serialize per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTag {
    args: Vec<TagArg>,
    append: bool,
}

impl QueryTag {
    /// Parse operation tokens of the form `name[]?(+|-)?=value`, plus the
    /// bare `append` keyword. Malformed tokens are a caller-visible syntax
    /// error; the merge layer never sees them.
    pub fn parse<'a, I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tag = Self::default();
        for token in tokens {
            if token == APPEND_KEYWORD {
                tag.append = true;
                continue;
            }

            let (name, raw_value) = token.split_once('=').ok_or_else(|| {
                QueryError::Syntax(format!("expected `name=value` or `append`, got `{token}`"))
            })?;
            let (key, mode) = parse_name(name)?;
            let value = parse_value(name, raw_value)?;
            tag.args.push(TagArg { key, mode, value });
        }
        Ok(tag)
    }

    #[must_use]
    pub const fn append(&self) -> bool {
        self.append
    }

    /// Resolve every argument, in declaration order, into typed operations.
    /// Unresolvable references degrade to no-op operations.
    #[must_use]
    pub fn operations(&self, resolver: &dyn Resolver) -> Vec<Operation> {
        self.args
            .iter()
            .map(|arg| {
                let resolved = match &arg.value {
                    ArgValue::Literal(text) => Resolved::Present(text.clone()),
                    ArgValue::Null => Resolved::Unset,
                    ArgValue::Reference(name) => match resolver.resolve(name) {
                        Resolution::Value(text) => Resolved::Present(text),
                        Resolution::Null => Resolved::Unset,
                        Resolution::Missing => Resolved::Absent,
                    },
                };
                Operation::new(arg.key.clone(), arg.mode, resolved)
            })
            .collect()
    }

    /// Merge into `base` and render with the tag's own append flag.
    #[must_use]
    pub fn render(&self, base: &QueryState, resolver: &dyn Resolver) -> String {
        self.render_with(base, resolver, Leading::from_append(self.append))
    }

    /// Merge into `base` and render with an explicit leading separator,
    /// overriding the tag's `append` keyword.
    #[must_use]
    pub fn render_with(&self, base: &QueryState, resolver: &dyn Resolver, leading: Leading) -> String {
        let ops = self.operations(resolver);
        let (merged, append) = merge(base, &ops, matches!(leading, Leading::Ampersand));
        serialize(&merged, Leading::from_append(append))
    }
}

fn parse_name(raw: &str) -> Result<(String, OpMode)> {
    let (name, mode) = split_marker(raw);
    let stem = name.strip_suffix("[]").unwrap_or(name);
    let valid = !stem.is_empty() && stem.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !valid {
        return Err(QueryError::Syntax(format!(
            "invalid operation name `{raw}`: expected word characters with an \
             optional `[]` suffix and at most one trailing `+` or `-` marker"
        )));
    }
    Ok((name.to_string(), mode))
}

fn parse_value(name: &str, raw: &str) -> Result<ArgValue> {
    if raw.is_empty() {
        return Err(QueryError::Syntax(format!("missing value for `{name}`")));
    }

    if let Some(quote) = raw.chars().next().filter(|&c| c == '\'' || c == '"') {
        let inner = &raw[1..];
        return match inner.strip_suffix(quote) {
            Some(literal) => Ok(ArgValue::Literal(literal.to_string())),
            None => Err(QueryError::Syntax(format!(
                "unterminated quoted value for `{name}`"
            ))),
        };
    }

    match raw {
        "None" | "null" => return Ok(ArgValue::Null),
        "True" | "true" => return Ok(ArgValue::Literal("true".to_string())),
        "False" | "false" => return Ok(ArgValue::Literal("false".to_string())),
        _ => {}
    }

    if is_numeric_literal(raw) {
        return Ok(ArgValue::Literal(raw.to_string()));
    }

    if is_reference_name(raw) {
        return Ok(ArgValue::Reference(raw.to_string()));
    }

    Err(QueryError::Syntax(format!(
        "invalid value `{raw}` for `{name}`: expected a quoted literal, a \
         number, `None`, or a context reference"
    )))
}

fn is_numeric_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let mut seen_dot = false;
    digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                true
            } else {
                c.is_ascii_digit()
            }
        })
}

fn is_reference_name(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && raw.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{EmptyResolver, JsonResolver};
    use crate::value::QueryValue;
    use serde_json::json;

    fn base(pairs: &[(&str, &str)]) -> QueryState {
        QueryState::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), QueryValue::scalar(*v))),
        )
    }

    #[test]
    fn literal_set_renders_into_base_state() {
        let tag = QueryTag::parse(["year='2011'"]).expect("parse");
        let rendered = tag.render(&base(&[("page", "1")]), &EmptyResolver);
        assert_eq!(rendered, "?page=1&year=2011");
    }

    #[test]
    fn bare_numbers_are_literals_not_references() {
        let tag = QueryTag::parse(["year=2011"]).expect("parse");
        let rendered = tag.render(&QueryState::new(), &EmptyResolver);
        assert_eq!(rendered, "?year=2011");
    }

    #[test]
    fn references_resolve_through_the_context() {
        let tag = QueryTag::parse(["title=title"]).expect("parse");
        let resolver = JsonResolver::new(json!({"title": "Some Title"}));
        let rendered = tag.render(&base(&[("page", "1")]), &resolver);
        assert_eq!(rendered, "?page=1&title=Some+Title");
    }

    #[test]
    fn missing_references_are_silently_skipped() {
        let tag = QueryTag::parse(["year='2011'", "title=title"]).expect("parse");
        let rendered = tag.render(&base(&[("page", "1")]), &EmptyResolver);
        assert_eq!(rendered, "?page=1&year=2011");
    }

    #[test]
    fn none_keyword_unsets_a_key() {
        let tag = QueryTag::parse(["page=None"]).expect("parse");
        let rendered = tag.render(&base(&[("page", "1")]), &EmptyResolver);
        assert_eq!(rendered, "");
    }

    #[test]
    fn null_valued_reference_unsets_a_key() {
        let tag = QueryTag::parse(["page=current"]).expect("parse");
        let resolver = JsonResolver::new(json!({"current": null}));
        let rendered = tag.render(&base(&[("page", "1")]), &resolver);
        assert_eq!(rendered, "");
    }

    #[test]
    fn append_keyword_switches_the_separator() {
        let tag = QueryTag::parse(["year='2010'", "append"]).expect("parse");
        assert!(tag.append());
        let rendered = tag.render(&base(&[("page", "1")]), &EmptyResolver);
        assert_eq!(rendered, "&page=1&year=2010");
    }

    #[test]
    fn explicit_leading_overrides_the_tag_flag() {
        let tag = QueryTag::parse(["year='2010'"]).expect("parse");
        let rendered = tag.render_with(
            &base(&[("page", "1")]),
            &EmptyResolver,
            Leading::Ampersand,
        );
        assert_eq!(rendered, "&page=1&year=2010");
    }

    #[test]
    fn marked_names_become_append_and_remove_operations() {
        let state = QueryState::from_pairs([("artists[]", QueryValue::list(["50", "60", "70"]))]);

        let tag = QueryTag::parse(["artists[]+=80"]).expect("parse");
        assert_eq!(
            tag.render(&state, &EmptyResolver),
            "?artists%5B%5D=50&artists%5B%5D=60&artists%5B%5D=70&artists%5B%5D=80"
        );

        let tag = QueryTag::parse(["artists[]-=60"]).expect("parse");
        assert_eq!(
            tag.render(&state, &EmptyResolver),
            "?artists%5B%5D=50&artists%5B%5D=70"
        );
    }

    #[test]
    fn duplicate_names_apply_in_declaration_order() {
        let tag = QueryTag::parse(["sort='ASC'", "sort='DESC'"]).expect("parse");
        let rendered = tag.render(&QueryState::new(), &EmptyResolver);
        assert_eq!(rendered, "?sort=DESC");
    }

    #[test]
    fn boolean_tokens_become_textual_literals() {
        let tag = QueryTag::parse(["active=true"]).expect("parse");
        let rendered = tag.render(&QueryState::new(), &EmptyResolver);
        assert_eq!(rendered, "?active=true");

        // false is falsy: never creates a key
        let tag = QueryTag::parse(["active=False"]).expect("parse");
        assert_eq!(tag.render(&QueryState::new(), &EmptyResolver), "");
    }

    #[test]
    fn token_without_equals_is_rejected() {
        let err = QueryTag::parse(["page"]).expect_err("must fail");
        assert_eq!(err.code(), "SYNTAX_ERROR");
    }

    #[test]
    fn malformed_names_are_rejected() {
        for token in ["=1", "pa ge='x'", "artists+[]='x'", "a[]++='x'", "[]='x'"] {
            let err = QueryTag::parse([token]).expect_err(token);
            assert_eq!(err.code(), "SYNTAX_ERROR");
        }
    }

    #[test]
    fn malformed_values_are_rejected() {
        for token in ["page=", "page='unterminated", "page=9bad", "page=a b"] {
            let err = QueryTag::parse([token]).expect_err(token);
            assert_eq!(err.code(), "SYNTAX_ERROR");
        }
    }

    #[test]
    fn parse_is_empty_tolerant() {
        let tag = QueryTag::parse([]).expect("parse");
        assert_eq!(tag.render(&base(&[("page", "1")]), &EmptyResolver), "?page=1");
        assert_eq!(tag.render(&QueryState::new(), &EmptyResolver), "");
    }
}
