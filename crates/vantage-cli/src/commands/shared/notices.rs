use vantage_dashboard::notify::{Notice, NoticeLevel, Notices};

use crate::ui;

const fn marker(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "ok",
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warn",
        NoticeLevel::Error => "error",
    }
}

fn format_notice(notice: &Notice) -> String {
    format!("[{}] {}: {}", marker(notice.level), notice.title, notice.message)
}

/// Whether `level` is shown under the given quiet setting. Quiet mode keeps
/// warnings and errors only.
const fn visible(level: NoticeLevel, quiet: bool) -> bool {
    !quiet || matches!(level, NoticeLevel::Warning | NoticeLevel::Error)
}

/// Drain a page's notices to stderr so stdout stays machine-readable.
pub fn flush(notices: &mut Notices) {
    let quiet = ui::prefs().quiet;
    for notice in notices.drain() {
        if visible(notice.level, quiet) {
            eprintln!("{}", format_notice(&notice));
        }
    }
}

#[cfg(test)]
mod tests {
    use vantage_dashboard::notify::{Notice, NoticeLevel};

    use super::{format_notice, visible};

    #[test]
    fn formats_level_title_and_message() {
        let notice = Notice {
            level: NoticeLevel::Warning,
            title: String::from("Validation Error"),
            message: String::from("Project name is required"),
        };
        assert_eq!(
            format_notice(&notice),
            "[warn] Validation Error: Project name is required"
        );
    }

    #[test]
    fn quiet_hides_success_and_info() {
        assert!(!visible(NoticeLevel::Success, true));
        assert!(!visible(NoticeLevel::Info, true));
        assert!(visible(NoticeLevel::Warning, true));
        assert!(visible(NoticeLevel::Error, true));
        assert!(visible(NoticeLevel::Success, false));
    }
}
