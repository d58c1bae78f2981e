//! The one-shot chat flow behind the binary.

use std::io::Write;

use crate::core::{CompletionProvider, LlmError, Transcript};
use crate::prompt::PromptSource;

/// Read one prompt, ask `provider` for a reply and print it to `out`.
///
/// A failed completion is logged and printed as an empty line. Only console
/// I/O errors are returned.
pub async fn run_once<P, C, W>(prompt: &mut P, provider: &C, out: &mut W) -> Result<(), LlmError>
where
    P: PromptSource,
    C: CompletionProvider + ?Sized,
    W: Write,
{
    let input = prompt.read_prompt()?;
    tracing::debug!(chars = input.chars().count(), "Prompt read");

    let reply = provider.complete_or_empty(&Transcript::single(input)).await;

    writeln!(out, "{reply}")?;
    out.flush()?;
    Ok(())
}
