/// Builds a URL slug from a page title.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single dash. Leading and trailing dashes are dropped,
/// so the result may be empty for titles with no alphanumeric content.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
