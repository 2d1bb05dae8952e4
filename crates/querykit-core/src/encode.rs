use url::form_urlencoded;

/// `application/x-www-form-urlencoded` serialization of `key=value` pairs:
/// space becomes `+`, everything reserved is percent-encoded (brackets in key
/// names included).
pub(crate) fn encode_pairs<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Decode a form-encoded query (without its leading separator) back into
/// pairs, in wire order.
#[must_use]
pub fn decode_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
