use tower_sessions::Session;

const FLASH_KEY: &str = "notes.flash";

pub fn created(title: &str) -> String {
    format!(r#"Note "{title}" created successfully!"#)
}

pub fn updated(title: &str) -> String {
    format!(r#"Note "{title}" updated successfully!"#)
}

pub fn deleted(title: &str) -> String {
    format!(r#"Note "{title}" deleted successfully!"#)
}

pub async fn set(session: &Session, message: String) {
    if let Err(e) = session.insert(FLASH_KEY, message).await {
        tracing::warn!("failed to store flash message: {e}");
    }
}

pub async fn take(session: &Session) -> Option<String> {
    session
        .remove::<String>(FLASH_KEY)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("failed to read flash message: {e}");
            None
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_quote_the_title() {
        assert_eq!(created("Shopping"), r#"Note "Shopping" created successfully!"#);
        assert_eq!(updated("Shopping"), r#"Note "Shopping" updated successfully!"#);
        assert_eq!(deleted("Shopping"), r#"Note "Shopping" deleted successfully!"#);
    }
}
