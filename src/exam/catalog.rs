/// Subjects and the topics a question may be drawn from, in display order.
pub const CATALOG: &[(&str, &[&str])] = &[
    ("Physics", &["Electricity", "Forces & Motion"]),
    ("Chemistry", &["Acids & Bases", "Atomic Structure"]),
    ("Biology", &["Genetics", "Human Body (3 Main Systems)"]),
];

pub fn topics_for(subject: &str) -> Option<&'static [&'static str]> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, topics)| *topics)
}

/// Exact, case-sensitive membership check.
pub fn is_allowed(subject: &str, topic: &str) -> bool {
    topics_for(subject).is_some_and(|topics| topics.contains(&topic))
}

/// Renders the catalog as prompt text, one line per subject.
pub fn describe() -> String {
    CATALOG
        .iter()
        .map(|(subject, topics)| format!("- {}: {}", subject, topics.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
