use crate::domain::model::MailMessage;
use crate::domain::ports::Mailer;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// How the mail program is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailMode {
    /// `<program> -s <subject> <to>` with the body on stdin. No shell.
    Direct,
    /// `echo "<body>" | <program> -s "<subject>" <to>` through `sh -c`,
    /// the legacy behaviour. Nothing is escaped.
    Shell,
}

#[derive(Debug, Clone)]
pub struct CommandMailer {
    program: String,
    mode: MailMode,
}

impl CommandMailer {
    pub fn new(program: impl Into<String>, mode: MailMode) -> Self {
        Self {
            program: program.into(),
            mode,
        }
    }

    pub fn direct_args(message: &MailMessage) -> Vec<String> {
        vec![
            "-s".to_string(),
            message.subject.clone(),
            message.to.clone(),
        ]
    }

    /// Raw interpolation: subject and body land in the line verbatim.
    pub fn shell_line(&self, message: &MailMessage) -> String {
        format!(
            "echo \"{}\" | {} -s \"{}\" {}",
            message.body, self.program, message.subject, message.to
        )
    }

    async fn send_direct(&self, message: &MailMessage) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(Self::direct_args(message))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut written = stdin.write_all(message.body.as_bytes()).await;
            if written.is_ok() {
                written = stdin.write_all(b"\n").await;
            }
            // dropping stdin closes the pipe so the program sees EOF
            drop(stdin);
            match written {
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("Mail program closed stdin before reading the whole body");
                }
                Err(e) => {
                    // reap the child before reporting the write failure
                    let _ = child.wait().await;
                    return Err(e.into());
                }
                Ok(()) => {}
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(RelayError::MailCommandError { status });
        }
        Ok(())
    }

    async fn send_shell(&self, message: &MailMessage) -> Result<()> {
        let line = self.shell_line(message);
        tracing::debug!("Running mail command through sh");

        let status = Command::new("sh")
            .arg("-c")
            .arg(&line)
            .stdout(Stdio::null())
            .status()
            .await?;
        if !status.success() {
            return Err(RelayError::MailCommandError { status });
        }
        Ok(())
    }
}

#[async_trait]
impl Mailer for CommandMailer {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        tracing::debug!(
            "Sending mail to {} via {} ({:?})",
            message.to,
            self.program,
            self.mode
        );
        match self.mode {
            MailMode::Direct => self.send_direct(message).await,
            MailMode::Shell => self.send_shell(message).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTILE: &str = "\"; rm -rf ~; echo \"";

    fn message(subject: &str, body: &str) -> MailMessage {
        MailMessage {
            to: "admin@example.com".to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_shell_line_layout() {
        let mailer = CommandMailer::new("mail", MailMode::Shell);
        let line = mailer.shell_line(&message("User Input", "Alice"));
        assert_eq!(
            line,
            "echo \"Alice\" | mail -s \"User Input\" admin@example.com"
        );
    }

    #[test]
    fn test_shell_line_keeps_metacharacters_verbatim() {
        let mailer = CommandMailer::new("mail", MailMode::Shell);

        let line = mailer.shell_line(&message(HOSTILE, "Alice"));
        assert!(line.contains(HOSTILE));

        let line = mailer.shell_line(&message("User Input", HOSTILE));
        assert!(line.contains(HOSTILE));
    }

    #[test]
    fn test_direct_args_keep_subject_as_one_argument() {
        let args = CommandMailer::direct_args(&message(HOSTILE, "Alice"));
        assert_eq!(args, vec!["-s", HOSTILE, "admin@example.com"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_shell_mode_reports_exit_status() {
        let ok = CommandMailer::new("true", MailMode::Shell);
        assert!(ok.send(&message("User Input", "Alice")).await.is_ok());

        let failing = CommandMailer::new("false", MailMode::Shell);
        let err = failing
            .send(&message("User Input", "Alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MailCommandError { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_direct_mode_ignores_unread_body_when_program_succeeds() {
        let mailer = CommandMailer::new("true", MailMode::Direct);
        let body = "x".repeat(1024 * 1024);
        assert!(mailer.send(&message("User Input", &body)).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_direct_mode_reports_exit_status() {
        let mailer = CommandMailer::new("false", MailMode::Direct);
        let body = "x".repeat(1024 * 1024);
        let err = mailer
            .send(&message("User Input", &body))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::MailCommandError { .. }));
    }

    #[tokio::test]
    async fn test_direct_mode_missing_program_is_io_error() {
        let mailer = CommandMailer::new("intake-relay-no-such-mailer", MailMode::Direct);
        let err = mailer
            .send(&message("User Input", "Alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::IoError(_)));
    }
}
