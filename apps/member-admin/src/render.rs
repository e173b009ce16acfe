//! Terminal rendering of the notification surface.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use member_admin_core::model::MemberSummary;
use member_admin_core::notification::{Dialog, NotificationKind};
use member_admin_core::viewer::{DetailViewer, VIEWER_TITLE};

pub fn print_dialog(dialog: Option<&Dialog>) {
    match dialog {
        Some(Dialog::Message(notification)) => match notification.kind {
            NotificationKind::Success => println!("{}", notification),
            NotificationKind::Error | NotificationKind::Validation => {
                eprintln!("{}", notification)
            }
        },
        Some(Dialog::ConfirmDelete(confirmation)) => println!("{}", confirmation.prompt()),
        None => {}
    }
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn ask_confirmation(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

pub fn print_member(viewer: &DetailViewer, member: &MemberSummary) {
    print!("{}", member_details(viewer, member));
}

/// Detail view of the member the viewer points at.
fn member_details(viewer: &DetailViewer, member: &MemberSummary) -> String {
    let [name, email, phone, role] = member.cells();
    let mut out = match viewer.current_url() {
        Some(url) => format!("{} ({})\n", VIEWER_TITLE, url),
        None => format!("{}\n", VIEWER_TITLE),
    };
    for (label, value) in [
        ("Name:", name),
        ("Email:", email),
        ("Phone Number:", phone),
        ("Role:", role),
    ] {
        let _ = writeln!(out, "  {:<14}{}", label, value);
    }
    out
}

/// Shows the first and last four characters of a secret.
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}
