use indexmap::IndexMap;

use data::Credential;

/// Case-insensitive substring match on url or username.
pub fn filter_credentials<'a>(credentials: &'a [Credential], search: &str) -> Vec<&'a Credential> {
    let needle = search.to_lowercase();
    credentials
        .iter()
        .filter(|credential| {
            credential.url.to_lowercase().contains(&needle)
                || credential.username.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Groups credentials for display, keyed by category label in first-seen
/// order. Credentials without a category land under "Uncategorized".
pub fn group_by_category<'a>(
    credentials: impl IntoIterator<Item = &'a Credential>,
) -> IndexMap<String, Vec<&'a Credential>> {
    let mut groups: IndexMap<String, Vec<&Credential>> = IndexMap::new();
    for credential in credentials {
        groups
            .entry(credential.category_label().to_string())
            .or_default()
            .push(credential);
    }
    groups
}
