mod recordings;

pub(in crate::tui_shell) use self::recordings::RecordingsView;
