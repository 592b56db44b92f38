//! Colored status lines for the user. Everything goes to stderr so that stdout stays free for
//! generated code in `--stdout` mode.

use std::{
    fmt::Display,
    path::Path,
};

use colored::{
    Color,
    Colorize,
};

use crate::output::{
    RenderedUnit,
    SkippedNote,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Message {
    Info,
    Success,
    Warning,
    Error,
}

fn log(msg_ty: Message, label: impl Display, msg: impl Display) {
    let color = msg_ty.get_color();
    eprintln!(
        "[{}] {} {}",
        msg_ty.to_string().color(color),
        label.to_string().color(LogColor::Label),
        msg.to_string().bright_black()
    );
}

impl Message {
    fn get_color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Error,
    Warning,
    Info,
}

/// One line per annotated field that was left out, so the user can see what is not on the wire.
pub fn log_skipped(source: &Path, note: &SkippedNote) {
    log(Message::Warning, "skipped", format!("{}: {note}", source.display()));
}

/// Reports a written unit. `artifact` is `None` when the unit went to stdout.
pub fn log_generated(unit: &RenderedUnit, artifact: Option<&Path>) {
    let records = match unit.records {
        1 => "1 record".to_string(),
        n => format!("{n} records"),
    };
    let msg = match artifact {
        Some(artifact) => format!(
            "{records} from {} into {}",
            unit.source.display(),
            artifact.display()
        ),
        None => format!("{records} from {}", unit.source.display()),
    };

    log(Message::Success, "generated", msg);
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Message::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Message::Success, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Message::Error, label, msg) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Label      => Color::TrueColor { r: 40,  g: 100, b: 153 },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Warning    => Color::TrueColor { r: 180, g: 105, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
            }
        }
    }
}

pub use unformatted::*;
