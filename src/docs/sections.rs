use super::SchemaRecord;

/// Section name used for records documented before the first banner.
pub const DEFAULT_SECTION: &str = "General";

/// Records that share a section banner, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Section title as written in the banner.
    pub name: &'a str,
    /// Records documented under the banner.
    pub records: Vec<&'a SchemaRecord>,
}

impl Section<'_> {
    /// Returns the intra-document link target for this section.
    pub fn anchor(&self) -> String {
        slugify(self.name)
    }
}

/// Groups records by section, keeping sections in first-seen order.
pub fn group_by_section(records: &[SchemaRecord]) -> Vec<Section<'_>> {
    let mut sections: Vec<Section<'_>> = Vec::new();

    for record in records {
        let name = if record.section.is_empty() {
            DEFAULT_SECTION
        } else {
            record.section.as_str()
        };

        match sections.iter_mut().find(|section| section.name == name) {
            Some(section) => section.records.push(record),
            None => sections.push(Section {
                name,
                records: vec![record],
            }),
        }
    }

    sections
}

/// Converts a section name into a markdown anchor.
///
/// Lowercases, turns spaces into hyphens and drops parentheses and slashes.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '/'))
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
