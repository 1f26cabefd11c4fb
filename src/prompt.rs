//! Interactive pause between maintenance steps.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub const ENTER_PROMPT: &str = "Press Enter to continue...";

/// Prints the prompt once, then consumes input up to and including the next
/// newline. The input content is discarded, not validated.
///
/// On end of input without a newline `read_line` yields zero bytes and the
/// pause returns immediately, so a closed stdin cannot wedge the program.
pub async fn pause_for_enter<R, W>(reader: &mut R, writer: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(ENTER_PROMPT.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(())
}

/// Pause on the real terminal streams.
pub async fn pause_on_stdin() -> io::Result<()> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    pause_for_enter(&mut stdin, &mut stdout).await
}
