/// Business logic for generating greeting messages.
///
/// Total over its input domain: an absent or empty name falls back to the
/// default greeting.
pub fn generate_greeting(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => format!("Hello {n}!"),
        _ => "Hello World!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(generate_greeting(Some("Ada")), "Hello Ada!");
        assert_eq!(generate_greeting(Some("Grace Hopper")), "Hello Grace Hopper!");
    }

    #[test]
    fn falls_back_to_default_when_name_absent() {
        assert_eq!(generate_greeting(None), "Hello World!");
    }

    #[test]
    fn falls_back_to_default_when_name_empty() {
        assert_eq!(generate_greeting(Some("")), "Hello World!");
    }
}
