//! 审核通过检测
//!
//! 只在进入 accepted 状态的上升沿触发：
//! not-accepted -> accepted 触发，accepted -> accepted 及其他转换均不触发。

use super::channel::NotificationMessage;
use super::formatter::render_message;
use super::snapshot::{ContentSnapshot, DocumentKind, TransitionEvent};

/// 是否应该发送通知
///
/// before 缺失视为 not-accepted，因此 `(None, accepted)` 会触发。
pub fn should_notify(before: Option<&ContentSnapshot>, after: Option<&ContentSnapshot>) -> bool {
    let Some(after) = after else {
        return false;
    };
    let previously_accepted = before.is_some_and(ContentSnapshot::is_accepted);
    after.is_accepted() && !previously_accepted
}

/// 判断事件并渲染消息（纯函数，无副作用）
///
/// 创建事件不检查审核状态，总是触发。
pub fn evaluate(kind: DocumentKind, event: &TransitionEvent, site_url: &str) -> Option<NotificationMessage> {
    match event {
        TransitionEvent::Updated { before, after } => {
            if !should_notify(before.as_ref(), after.as_ref()) {
                return None;
            }
            after.as_ref().map(|after| render_message(kind, after, site_url))
        }
        TransitionEvent::Created { snapshot } => Some(render_message(kind, snapshot, site_url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::moderation::ModerationStatus;

    fn snap(status: Option<ModerationStatus>) -> ContentSnapshot {
        ContentSnapshot {
            moderation: status,
            ..Default::default()
        }
    }

    #[test]
    fn test_should_notify_truth_table() {
        let statuses = [
            None,
            Some(ModerationStatus::Draft),
            Some(ModerationStatus::AwaitingModeration),
            Some(ModerationStatus::ImprovementsNeeded),
            Some(ModerationStatus::Rejected),
            Some(ModerationStatus::Accepted),
            Some(ModerationStatus::Other("archived".to_string())),
        ];

        for before_present in [false, true] {
            for before_status in &statuses {
                for after_present in [false, true] {
                    for after_status in &statuses {
                        let before = before_present.then(|| snap(before_status.clone()));
                        let after = after_present.then(|| snap(after_status.clone()));

                        let expected = after_present
                            && after_status == &Some(ModerationStatus::Accepted)
                            && !(before_present && before_status == &Some(ModerationStatus::Accepted));

                        assert_eq!(
                            should_notify(before.as_ref(), after.as_ref()),
                            expected,
                            "before={:?} after={:?}",
                            before,
                            after
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pending_to_accepted_fires() {
        let before = snap(Some(ModerationStatus::AwaitingModeration));
        let after = snap(Some(ModerationStatus::Accepted));
        assert!(should_notify(Some(&before), Some(&after)));
    }

    #[test]
    fn test_accepted_to_accepted_does_not_fire() {
        let accepted = snap(Some(ModerationStatus::Accepted));
        assert!(!should_notify(Some(&accepted), Some(&accepted)));
        // 重复投递同一事件也不会再次触发
        assert!(!should_notify(Some(&accepted), Some(&accepted)));
    }

    #[test]
    fn test_missing_before_fires() {
        let after = snap(Some(ModerationStatus::Accepted));
        assert!(should_notify(None, Some(&after)));
    }

    #[test]
    fn test_missing_after_never_fires() {
        let before = snap(Some(ModerationStatus::Draft));
        assert!(!should_notify(Some(&before), None));
        assert!(!should_notify(None, None));
    }

    #[test]
    fn test_evaluate_update_renders_after() {
        let before = snap(Some(ModerationStatus::AwaitingModeration)).with_field("_id", "old");
        let after = snap(Some(ModerationStatus::Accepted))
            .with_field("_id", "abc123")
            .with_field("type", "trash");
        let event = TransitionEvent::updated(Some(before), Some(after));

        let msg = evaluate(DocumentKind::Pin, &event, "SITE_URL").unwrap();
        assert_eq!(
            msg.content,
            "📍 *New trash* pin from abc123. \n Location here <SITE_URL/map/#abc123>"
        );
    }

    #[test]
    fn test_evaluate_update_skips() {
        let accepted = snap(Some(ModerationStatus::Accepted));
        let event = TransitionEvent::updated(Some(accepted.clone()), Some(accepted));
        assert_eq!(evaluate(DocumentKind::HowTo, &event, "https://x"), None);
    }

    #[test]
    fn test_evaluate_create_is_unconditional() {
        let event = TransitionEvent::created(snap(None).with_field("_createdBy", "alice"));
        let msg = evaluate(DocumentKind::Question, &event, "https://x").unwrap();
        assert!(msg.content.starts_with("❓ alice has a new question"));
    }
}
