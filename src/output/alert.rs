use crate::consts::WARNING_DAYS;

/// Title and body of the expiring-soon notification
pub(crate) fn expiring_alert(lines: &[String]) -> (&'static str, String) {
    if lines.is_empty() {
        (
            "No Alerts",
            format!("No items expiring in the next {WARNING_DAYS} days!"),
        )
    } else {
        (
            "Expiration Alert",
            format!("Items expiring soon:\n\n{}", lines.join("\n")),
        )
    }
}
