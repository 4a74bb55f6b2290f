use crate::domain::model::UserInput;
use crate::domain::ports::Prompt;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompt;

impl TerminalPrompt {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn ask(&self, question: &str) -> Result<UserInput> {
        let mut stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        read_answer(&mut stdin, &mut stdout, question).await
    }
}

/// Writes `question`, then reads a single line. Only the line terminator
/// is removed.
pub async fn read_answer<R, W>(reader: &mut R, writer: &mut W, question: &str) -> Result<UserInput>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(question.as_bytes()).await?;
    writer.flush().await?;

    let mut raw = Vec::new();
    let read = reader.read_until(b'\n', &mut raw).await?;
    if read == 0 {
        return Err(RelayError::InputClosed);
    }

    strip_terminator(&mut raw);
    tracing::debug!("Read {} bytes from prompt", raw.len());
    // terminals are not always UTF-8; keep what we can
    Ok(UserInput(String::from_utf8_lossy(&raw).into_owned()))
}

fn strip_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
