/// Transient user-facing notifications. The popup keeps a queue in a
/// signal and passes it into whichever component needs to raise one,
/// rather than reaching for a global toast context.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn notify(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title.into(), description.into(), Severity::Info)
    }

    /// Errors and warnings both use the destructive styling.
    pub fn destructive(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> u64 {
        self.push(title.into(), description.into(), Severity::Destructive)
    }

    fn push(&mut self, title: String, description: String, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            title,
            description,
            severity,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NoticeQueue::default();
        let id = queue.destructive("Connection Failed", "session handler unavailable");
        assert_eq!(queue.len(), 1);
        let notice = queue.iter().next().unwrap();
        assert_eq!(notice.title, "Connection Failed");
        assert_eq!(notice.severity, Severity::Destructive);

        queue.dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_are_unique_after_dismiss() {
        let mut queue = NoticeQueue::default();
        let first = queue.notify("a", "");
        queue.dismiss(first);
        let second = queue.notify("b", "");
        assert_ne!(first, second);
    }

    #[test]
    fn test_dismissing_unknown_id_is_a_noop() {
        let mut queue = NoticeQueue::default();
        queue.notify("a", "");
        queue.dismiss(999);
        assert_eq!(queue.len(), 1);
    }
}
