//! Technical reference page (`values-reference.md`).

use super::{SchemaRecord, Section, generate_parameter_table, group_by_section};

const FURTHER_READING: &[&str] = &[
    "- [BunkerWeb Documentation](https://docs.bunkerweb.io/)",
    "- [Kubernetes Configuration Best Practices](https://kubernetes.io/docs/concepts/configuration/)",
    "- [Helm Chart Development Guide](https://helm.sh/docs/chart_template_guide/)",
];

/// Generates the lines of the compact values reference.
///
/// Contains a table of contents and one parameter table per section,
/// followed by a fixed footer.
pub fn generate_reference_page(records: &[SchemaRecord]) -> Vec<String> {
    let sections = group_by_section(records);
    let mut content = Vec::new();

    content.push("# BunkerWeb Helm Chart - Values Reference".to_string());
    content.push(String::new());
    content.push(
        "Quick reference for all configuration values available in the BunkerWeb Helm chart."
            .to_string(),
    );
    content.push(String::new());
    content.push(
        "> ⚠️ **Auto-generated**: This file is automatically generated from `values.yaml`. Do not edit manually."
            .to_string(),
    );
    content.push(String::new());

    content.extend(table_of_contents(&sections));

    for section in &sections {
        content.push(format!("## {}", section.name));
        content.push(String::new());
        content.push(generate_parameter_table(&section.records));
        content.push(String::new());
    }

    content.push("## Further Reading".to_string());
    content.push(String::new());
    content.extend(FURTHER_READING.iter().map(|line| line.to_string()));
    content.push(String::new());
    content.push("---".to_string());
    content.push("*This documentation was auto-generated from `values.yaml`*".to_string());

    content
}

/// Generates the `## Table of Contents` block shared by both pages.
pub(crate) fn table_of_contents(sections: &[Section<'_>]) -> Vec<String> {
    let mut content = vec!["## Table of Contents".to_string(), String::new()];

    content.extend(
        sections
            .iter()
            .map(|section| format!("- [{}](#{})", section.name, section.anchor())),
    );
    content.push(String::new());

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::ValueType;

    fn record(section: &str, parameter: &str) -> SchemaRecord {
        SchemaRecord {
            section: section.to_string(),
            parameter: parameter.to_string(),
            description: format!("Configuration for {parameter}"),
            value_type: ValueType::Bool,
            default: "`false`".to_string(),
            examples: Vec::new(),
        }
    }

    #[test]
    fn lists_every_section_in_contents() {
        let records = vec![
            record("Global Settings", "nodeSelector"),
            record("Monitoring (Prometheus)", "prometheus.enabled"),
        ];

        let page = generate_reference_page(&records);

        assert!(page.contains(&"- [Global Settings](#global-settings)".to_string()));
        assert!(page.contains(&"- [Monitoring (Prometheus)](#monitoring-prometheus)".to_string()));
        assert!(page.contains(&"## Monitoring (Prometheus)".to_string()));
    }

    #[test]
    fn sections_follow_first_seen_order() {
        let records = vec![record("B", "b"), record("", "g"), record("A", "a")];
        let page = generate_reference_page(&records);

        let headings = page
            .iter()
            .filter(|line| line.starts_with("## "))
            .map(String::as_str)
            .collect::<Vec<_>>();

        assert_eq!(
            headings,
            vec![
                "## Table of Contents",
                "## B",
                "## General",
                "## A",
                "## Further Reading"
            ]
        );
    }

    #[test]
    fn ends_with_generation_disclaimer() {
        let page = generate_reference_page(&[]);

        assert_eq!(page.first().map(String::as_str), Some("# BunkerWeb Helm Chart - Values Reference"));
        assert_eq!(
            page.last().map(String::as_str),
            Some("*This documentation was auto-generated from `values.yaml`*")
        );
    }
}
