//! Toast notifications shown by the detail view.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Error,
}

/// A short message the host shows over the detail screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Ok, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.kind {
            ToastKind::Ok => "[OK]",
            ToastKind::Error => "[!!]",
        };
        write!(f, "{} {}", tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(Toast::ok("Saved").kind, ToastKind::Ok);
        assert_eq!(Toast::error("Nope").kind, ToastKind::Error);
    }

    #[test]
    fn test_display_tags_kind() {
        assert_eq!(Toast::ok("Saved").to_string(), "[OK] Saved");
        assert_eq!(Toast::error("Nope").to_string(), "[!!] Nope");
    }
}
