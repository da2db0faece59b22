/// Apply literal replacements to `source` in order.
///
/// Each pair rewrites every occurrence in the output of the previous pair. Pairs with an empty
/// search string are skipped.
#[tracing::instrument(skip_all, fields(pairs = replacements.len()))]
pub fn preprocess(source: &str, replacements: &[(String, String)]) -> String {
    let mut out = source.to_owned();
    for (search, replace) in replacements {
        if search.is_empty() {
            continue;
        }
        if out.contains(search.as_str()) {
            out = out.replace(search.as_str(), replace);
        }
    }
    out
}
