//! Transient user feedback with timed dismissal
//!
//! Two channels mirror the window layout: a centered banner that blocks the
//! rest of the interface while visible, and a status line at the bottom of
//! the window. Each channel holds at most one notice; showing another
//! replaces it. Rendering is best-effort, nothing here can fail.

use std::time::{Duration, Instant};

/// Visual flavor of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// One timed message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notice {
    fn new(text: String, kind: NoticeKind, duration: Duration) -> Self {
        Self {
            text,
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    /// True once the full duration has passed.
    pub fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.duration
    }

    /// Linear 0.0 to 1.0 fill over the lifetime, clamped afterwards.
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(self.shown_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn remaining_at(&self, now: Instant) -> Duration {
        self.duration
            .saturating_sub(now.duration_since(self.shown_at))
    }
}

/// Holds the at-most-one notice per channel.
#[derive(Default)]
pub struct Notifier {
    banner: Option<Notice>,
    status: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bottom status line notice.
    pub fn show_transient(&mut self, text: impl Into<String>, kind: NoticeKind, duration: Duration) {
        self.status = Some(Notice::new(text.into(), kind, duration));
    }

    /// Replaces the banner notice. While a banner is live the rest of the
    /// interface is blocked.
    pub fn show_blocking(&mut self, text: impl Into<String>, kind: NoticeKind, duration: Duration) {
        self.banner = Some(Notice::new(text.into(), kind, duration));
    }

    /// Drops notices whose time is up.
    pub fn tick(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|n| n.expired_at(now)) {
            self.banner = None;
        }
        if self.status.as_ref().is_some_and(|n| n.expired_at(now)) {
            self.status = None;
        }
    }

    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    /// Earliest upcoming dismissal, for scheduling the next repaint.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        let banner = self.banner.as_ref().map(|n| n.remaining_at(now));
        let status = self.status.as_ref().map(|n| n.remaining_at(now));
        match (banner, status) {
            (Some(b), Some(s)) => Some(b.min(s)),
            (banner, status) => banner.or(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_transient_notice_expires_after_its_duration() {
        let mut notifier = Notifier::new();
        let before = Instant::now();
        notifier.show_transient("Operacion cancelada.", NoticeKind::Warning, ms(3000));
        let after = Instant::now();

        notifier.tick(before + ms(2999));
        assert!(notifier.status().is_some());

        notifier.tick(after + ms(3001));
        assert!(notifier.status().is_none());
    }

    #[test]
    fn test_new_notice_replaces_the_previous_one() {
        let mut notifier = Notifier::new();
        notifier.show_transient("primero", NoticeKind::Info, ms(5000));
        notifier.show_transient("segundo", NoticeKind::Error, ms(5000));

        let status = notifier.status().unwrap();
        assert_eq!(status.text, "segundo");
        assert_eq!(status.kind, NoticeKind::Error);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut notifier = Notifier::new();
        notifier.show_blocking("Se ha iniciado 'imagenes.exe'.", NoticeKind::Success, ms(3000));
        notifier.show_transient("estado", NoticeKind::Warning, ms(5000));
        let after = Instant::now();

        notifier.tick(after + ms(3001));
        assert!(notifier.banner().is_none());
        assert_eq!(notifier.status().unwrap().text, "estado");
    }

    #[test]
    fn test_banner_fill_grows_linearly() {
        let mut notifier = Notifier::new();
        let before = Instant::now();
        notifier.show_blocking("Se ha iniciado 'imagenes.exe'.", NoticeKind::Success, ms(3000));
        let after = Instant::now();

        let notice = notifier.banner().unwrap();
        assert_eq!(notice.progress_at(before), 0.0);

        let midway = notice.progress_at(after + ms(1500));
        assert!((0.45..=0.55).contains(&midway), "fill was {midway}");

        assert_eq!(notice.progress_at(after + ms(5000)), 1.0);
    }

    #[test]
    fn test_zero_duration_notice_is_complete_at_once() {
        let mut notifier = Notifier::new();
        notifier.show_blocking("instantaneo", NoticeKind::Info, ms(0));
        let after = Instant::now();

        let notice = notifier.banner().unwrap();
        assert_eq!(notice.progress_at(after), 1.0);
        assert!(notice.expired_at(after));
    }

    #[test]
    fn test_tick_with_nothing_to_dismiss_is_harmless() {
        let mut notifier = Notifier::new();
        notifier.tick(Instant::now());

        notifier.show_transient("algo", NoticeKind::Info, ms(0));
        let after = Instant::now();
        notifier.tick(after);
        notifier.tick(after + ms(1));
        assert!(notifier.status().is_none());
    }

    #[test]
    fn test_next_deadline_reports_the_soonest_dismissal() {
        let mut notifier = Notifier::new();
        let before = Instant::now();
        notifier.show_blocking("banner", NoticeKind::Info, ms(3000));
        notifier.show_transient("estado", NoticeKind::Info, ms(5000));

        let deadline = notifier.next_deadline(before).unwrap();
        assert!(deadline <= ms(3000));
        assert!(deadline > ms(2900));

        assert!(Notifier::new().next_deadline(before).is_none());
    }
}
