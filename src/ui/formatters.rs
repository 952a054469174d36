use crate::core::topology::CoreGovernors;

const ACTIVE_MARKER: &str = "●";
const INACTIVE_MARKER: &str = "○";

/// One line per governor, marking the active one
pub fn format_governor_list(available: &[String], active: Option<&str>) -> Vec<String> {
    available
        .iter()
        .map(|governor| {
            let marker = if Some(governor.as_str()) == active {
                ACTIVE_MARKER
            } else {
                INACTIVE_MARKER
            };
            format!("{} {}", marker, governor)
        })
        .collect()
}

/// Render an optional governor, falling back to a placeholder
pub fn format_governor(governor: Option<&str>) -> String {
    governor.unwrap_or("<unreadable>").to_string()
}

/// Format one row of the per-core table
pub fn format_core_row(core: &CoreGovernors) -> String {
    let available = if core.available.is_empty() {
        "-".to_string()
    } else {
        core.available.join(" ")
    };

    format!(
        "{:<6} {:<14} {}",
        format!("cpu{}", core.core),
        format_governor(core.active.as_deref()),
        available
    )
}
