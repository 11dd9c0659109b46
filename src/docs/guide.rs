//! Narrative configuration guide (`values.md`).
//!
//! Sections whose titles match a known topic get an introduction and an
//! illustrative snippet ahead of their parameter table. Topics are tried
//! in order and the first match wins.

use super::{SchemaRecord, generate_parameter_table, group_by_section, reference::table_of_contents};

/// Introductory content attached to sections about a known topic.
pub struct SectionGuide {
    /// Decides whether a section title belongs to this topic.
    pub matches: fn(&str) -> bool,
    /// One-sentence introduction placed under the section heading.
    pub intro: &'static str,
    /// Heading of the example snippet.
    pub example_heading: &'static str,
    /// YAML snippet lines for the given section title.
    pub snippet: fn(&str) -> &'static [&'static str],
}

/// Ordered topic table; the first matching entry is used.
pub const SECTION_GUIDES: &[SectionGuide] = &[
    SectionGuide {
        matches: |name| name.contains("Global"),
        intro: "These settings apply to all components and can be overridden by component-specific values.",
        example_heading: "Example Configuration",
        snippet: |_| GLOBAL_SNIPPET,
    },
    SectionGuide {
        matches: |name| name.contains("BunkerWeb") && name.contains("Core"),
        intro: "Core BunkerWeb settings that control how it behaves in the Kubernetes environment.",
        example_heading: "Security Configuration",
        snippet: |_| CORE_SNIPPET,
    },
    SectionGuide {
        matches: |name| name.contains("Service"),
        intro: "Configure how BunkerWeb is exposed outside the cluster.",
        example_heading: "Load Balancer Configuration",
        snippet: |_| SERVICE_SNIPPET,
    },
    SectionGuide {
        matches: |name| name.contains("BunkerWeb Component"),
        intro: "Main BunkerWeb reverse proxy and WAF configuration.",
        example_heading: "DaemonSet vs Deployment",
        snippet: |_| COMPONENT_SNIPPET,
    },
    SectionGuide {
        matches: |name| name.contains("Monitoring"),
        intro: "Monitoring and observability configuration.",
        example_heading: "Enable Full Monitoring Stack",
        snippet: |name| {
            if name.contains("Prometheus") {
                PROMETHEUS_SNIPPET
            } else {
                GRAFANA_SNIPPET
            }
        },
    },
];

const GLOBAL_SNIPPET: &[&str] = &[
    "# Global node selector",
    "nodeSelector:",
    "  kubernetes.io/arch: \"amd64\"",
    "",
    "# Global tolerations",
    "tolerations:",
    "  - key: node-role",
    "    operator: Equal",
    "    value: master",
    "    effect: NoSchedule",
];

const CORE_SNIPPET: &[&str] = &[
    "settings:",
    "  # Use existing secret for sensitive data",
    "  existingSecret: \"bunkerweb-secrets\"",
    "  ",
    "  kubernetes:",
    "    # Monitor specific namespaces",
    "    namespaces: \"default,production\"",
    "    ingressClass: \"bunkerweb\"",
];

const SERVICE_SNIPPET: &[&str] = &[
    "service:",
    "  type: LoadBalancer",
    "  externalTrafficPolicy: Local",
    "  annotations:",
    "    # AWS Network Load Balancer",
    "    service.beta.kubernetes.io/aws-load-balancer-type: \"nlb\"",
];

const COMPONENT_SNIPPET: &[&str] = &[
    "bunkerweb:",
    "  # DaemonSet: One pod per node (recommended)",
    "  kind: DaemonSet",
    "  hostPorts: true",
    "  ",
    "  # OR Deployment: Specific number of replicas",
    "  # kind: Deployment",
    "  # replicas: 3",
    "  # hostPorts: false",
];

const PROMETHEUS_SNIPPET: &[&str] = &[
    "prometheus:",
    "  enabled: true",
    "  persistence:",
    "    enabled: true",
    "    size: 50Gi",
];

const GRAFANA_SNIPPET: &[&str] = &[
    "grafana:",
    "  enabled: true",
    "  adminPassword: \"secure-password\"",
    "  ingress:",
    "    enabled: true",
    "    hosts:",
    "      - host: grafana.example.com",
];

const QUICK_START: &[&str] = &[
    "## Quick Start",
    "",
    "```bash",
    "# Add the BunkerWeb Helm repository",
    "helm repo add bunkerweb https://repo.bunkerweb.io/charts",
    "",
    "# Install with default values",
    "helm install mybunkerweb bunkerweb/bunkerweb",
    "",
    "# Install with custom values",
    "helm install mybunkerweb bunkerweb/bunkerweb -f custom-values.yaml",
    "```",
    "",
];

const CLOSING: &[&str] = &[
    "## Best Practices",
    "",
    "### Security",
    "- Always change default passwords in production",
    "- Use Kubernetes secrets for sensitive data",
    "- Enable network policies for micro-segmentation",
    "- Set appropriate resource limits",
    "",
    "### Performance",
    "- Use DaemonSet for better performance",
    "- Configure resource requests and limits",
    "- Enable persistent storage for databases",
    "",
    "### High Availability",
    "- Enable Pod Disruption Budgets",
    "- Use anti-affinity rules",
    "- Configure health checks properly",
    "",
    "## Examples",
    "",
    "See the [`examples/`](../examples/) directory for complete configuration examples:",
    "- [`minimal.yaml`](../examples/minimal.yaml) - Basic setup",
    "- [`production.yaml`](../examples/production.yaml) - Production-ready configuration",
    "- [`monitoring.yaml`](../examples/monitoring.yaml) - Full monitoring stack",
];

/// Finds the guide entry for a section title, if any.
pub fn guide_for(section_name: &str) -> Option<&'static SectionGuide> {
    SECTION_GUIDES
        .iter()
        .find(|guide| (guide.matches)(section_name))
}

/// Generates the lines of the configuration guide.
pub fn generate_guide_page(records: &[SchemaRecord]) -> Vec<String> {
    let sections = group_by_section(records);
    let mut content = Vec::new();

    content.push("# BunkerWeb Helm Chart - Configuration Guide".to_string());
    content.push(String::new());
    content.push(
        "Complete configuration guide for the BunkerWeb Helm chart with examples and best practices."
            .to_string(),
    );
    content.push(String::new());
    content.push(
        "> 📚 **User Guide**: This document provides detailed explanations and examples for configuring BunkerWeb."
            .to_string(),
    );
    content.push(
        "> For a quick reference, see [`values-reference.md`](values-reference.md).".to_string(),
    );
    content.push(String::new());

    content.extend(lines(QUICK_START));
    content.extend(table_of_contents(&sections));

    for section in &sections {
        content.push(format!("## {}", section.name));
        content.push(String::new());

        if let Some(guide) = guide_for(section.name) {
            content.extend(guide_block(guide, section.name));
        }

        content.push("### Configuration Values".to_string());
        content.push(String::new());
        content.push(generate_parameter_table(&section.records));
        content.push(String::new());
    }

    content.extend(lines(CLOSING));

    content
}

fn guide_block(guide: &SectionGuide, section_name: &str) -> Vec<String> {
    let mut block = vec![
        guide.intro.to_string(),
        String::new(),
        format!("### {}", guide.example_heading),
        "```yaml".to_string(),
    ];

    block.extend(lines((guide.snippet)(section_name)));
    block.push("```".to_string());
    block.push(String::new());

    block
}

fn lines(source: &[&str]) -> impl Iterator<Item = String> {
    source.iter().map(|line| line.to_string())
}
